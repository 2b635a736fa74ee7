//! Conversions between `Deci` and native integers.
//!
//! Widening conversions are exact and infallible: the magnitude lands in
//! the low limbs with exponent zero. Narrowing back truncates fractional
//! digits and fails with [`DeciError::Overflow`] once the scaled
//! significand leaves the 63-bit magnitude range.

use core::cmp::Ordering;

use crate::deci::Deci;
use crate::error::DeciError;
use crate::limbs;
use crate::limbs::dec::{self, Trunc};

impl From<i64> for Deci {
    fn from(v: i64) -> Deci {
        let mag = v.unsigned_abs();
        Deci::raw([mag as u32, (mag >> 32) as u32, 0], v < 0, 0)
    }
}

impl From<u64> for Deci {
    fn from(v: u64) -> Deci {
        Deci::raw([v as u32, (v >> 32) as u32, 0], false, 0)
    }
}

impl From<i32> for Deci {
    fn from(v: i32) -> Deci {
        Deci::from(v as i64)
    }
}

impl From<u32> for Deci {
    fn from(v: u32) -> Deci {
        Deci::raw([v, 0, 0], false, 0)
    }
}

impl TryFrom<Deci> for i64 {
    type Error = DeciError;

    /// Truncates toward zero; exact integers round-trip.
    fn try_from(a: Deci) -> Result<i64, DeciError> {
        if a.is_zero() || a.exp < -26 {
            return Ok(0);
        }

        let mut sa = a.sig4();
        let e = a.exp as i32;
        if e >= 20 {
            return Err(DeciError::Overflow);
        }
        if e > 0 {
            if limbs::cmp(&dec::POW10[(20 - e) as usize], &sa[..3]) != Ordering::Greater {
                return Err(DeciError::Overflow);
            }
            dec::mul_pow10(&mut sa, e);
        } else if e < 0 {
            // fractional digits are simply dropped
            let mut t = Trunc::Exact;
            dec::div_pow10(&mut sa[..3], -e, &mut t);
        }

        if sa[2] != 0 {
            return Err(DeciError::Overflow);
        }
        let mag = (sa[1] as u64) << 32 | sa[0] as u64;
        if a.neg {
            if mag > 1 << 63 {
                return Err(DeciError::Overflow);
            }
            Ok((mag as i64).wrapping_neg())
        } else {
            if mag >= 1 << 63 {
                return Err(DeciError::Overflow);
            }
            Ok(mag as i64)
        }
    }
}
