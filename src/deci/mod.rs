//! The fixed-precision decimal value type.
//!
//! A [`Deci`] encodes `(-1)^s * m * 10^e` with a significand `m` of at
//! most 26 decimal digits held in three little-endian 32-bit limbs, a
//! one-bit sign and a signed 8-bit exponent. The encoding is
//! unnormalized: the same number admits many `(m, e)` pairs, and every
//! comparison aligns exponents before looking at digits. A value is 16
//! bytes, `Copy`, and immutable; operations return fresh values.
//!
//! Arithmetic lives in [`ops`](self), rounding to a multiple in
//! [`round`](self), the ordering relation in [`cmp`](self) and the
//! foreign-representation conversions under [`conv`](self).

use crate::error::DeciError;
use crate::limbs;
use crate::limbs::dec;

mod cmp;
mod conv;
mod norm;
mod ops;
mod round;

pub use round::RoundMode;

/// `10^26`, one past the largest significand.
const COEFF_SPAN: u128 = 100_000_000_000_000_000_000_000_000;

/// Signed fixed-precision decimal: 26 significant digits, exponent in
/// `[-128, 127]`.
#[derive(Copy, Clone, Debug)]
pub struct Deci {
    /// Significand limbs, least significant first.
    pub(crate) m: [u32; 3],
    /// `true` for non-positive values. A zero may carry either sign.
    pub(crate) neg: bool,
    pub(crate) exp: i8,
}

impl Deci {
    pub const ZERO: Deci = Deci { m: [0; 3], neg: false, exp: 0 };
    pub const ONE: Deci = Deci { m: [1, 0, 0], neg: false, exp: 0 };
    /// Largest finite value, `(10^26 - 1) * 10^127`.
    pub const MAX: Deci = Deci { m: dec::COEFF_MAX, neg: false, exp: 127 };
    /// Smallest finite value, `-(10^26 - 1) * 10^127`.
    pub const MIN: Deci = Deci { m: dec::COEFF_MAX, neg: true, exp: 127 };

    pub(crate) const fn raw(m: [u32; 3], neg: bool, exp: i8) -> Deci {
        Deci { m, neg, exp }
    }

    /// Builds a value from an integer significand, sign and exponent.
    ///
    /// Fails with [`DeciError::Overflow`] when `coeff` does not fit in 26
    /// decimal digits. The encoding is kept as given; no normalization.
    pub fn from_parts(coeff: u128, negative: bool, exponent: i8) -> Result<Deci, DeciError> {
        if coeff >= COEFF_SPAN {
            return Err(DeciError::Overflow);
        }
        Ok(Deci::raw(
            [coeff as u32, (coeff >> 32) as u32, (coeff >> 64) as u32],
            negative,
            exponent,
        ))
    }

    /// The significand as an integer.
    pub fn coeff(&self) -> u128 {
        (self.m[2] as u128) << 64 | (self.m[1] as u128) << 32 | self.m[0] as u128
    }

    /// The stored exponent.
    pub fn exponent(&self) -> i8 {
        self.exp
    }

    /// The stored sign flag. Note that a zero may be negative.
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.m)
    }

    /// The magnitude of `self`.
    pub fn abs(mut self) -> Deci {
        self.neg = false;
        self
    }

    /// Zero, one or minus one according to the sign of `self`.
    pub fn signum(self) -> Deci {
        if self.is_zero() {
            self
        } else if self.neg {
            Deci { neg: true, ..Deci::ONE }
        } else {
            Deci::ONE
        }
    }

    /// Bit-for-bit identity of the two encodings. All zeros are the same
    /// value regardless of their sign or exponent; apart from that, two
    /// encodings of one number with different exponents are *not* the
    /// same (use `==` for numeric equality).
    pub fn is_same(self, other: Deci) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }
        self.m == other.m && self.neg == other.neg && self.exp == other.exp
    }

    /// Significand widened by one headroom limb, as alignment wants it.
    pub(crate) fn sig4(&self) -> [u32; 4] {
        [self.m[0], self.m[1], self.m[2], 0]
    }

    pub(crate) fn with_sign(mut self, neg: bool) -> Deci {
        self.neg = neg;
        self
    }
}
