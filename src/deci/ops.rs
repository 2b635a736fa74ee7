//! Addition, subtraction, multiplication, division and modulus.
//!
//! Every operation aligns or scales through the limb primitives, rounds
//! half-to-even from the recorded truncation state, and fails with
//! [`DeciError::Overflow`] rather than ever returning a significand of
//! 27 digits or an exponent outside `[-128, 127]`.
//!
//! The operator traits panic on failure the way the built-in integer
//! operators do; the `checked_*` methods are the non-panicking surface.

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::deci::norm::{make_comparable, rescale};
use crate::deci::Deci;
use crate::error::DeciError;
use crate::limbs;
use crate::limbs::dec::{self, Trunc};

const LIMB_RADIX: f64 = 4294967296.0;

/// Number of limbs up to and including the top non-zero one (at least 1).
fn active(a: &[u32]) -> usize {
    let mut n = a.len();
    while n > 1 && a[n - 1] == 0 {
        n -= 1;
    }
    n
}

fn magnitude(m: &[u32; 3]) -> f64 {
    (m[2] as f64 * LIMB_RADIX + m[1] as f64) * LIMB_RADIX + m[0] as f64
}

impl Deci {
    /// Sum of `self` and `rhs`, correctly rounded half-to-even.
    pub fn checked_add(self, rhs: Deci) -> Result<Deci, DeciError> {
        let mut sa = self.sig4();
        let mut sb = rhs.sig4();
        let (mut ea, mut eb) = (self.exp as i32, rhs.exp as i32);
        let (mut ta, mut tb) = (Trunc::Exact, Trunc::Exact);
        make_comparable(&mut sa, &mut ea, &mut ta, &mut sb, &mut eb, &mut tb);

        let mut sc = [0u32; 4];
        let mut neg = self.neg;
        if self.neg == rhs.neg {
            limbs::add(&mut sc, &sa[..3], &sb[..3]);
            // alignment shifts at most one side, so at most one state
            // carries information
            let mut tc = if ta != Trunc::Exact { ta } else { tb };
            for _ in 0..2 {
                let test = limbs::cmp(&sc[..3], &dec::COEFF_MAX);
                if test == Ordering::Greater || (test == Ordering::Equal && tc.rounds_up(sc[0])) {
                    if ea == 127 {
                        return Err(DeciError::Overflow);
                    }
                    ea += 1;
                    dec::div_pow10(&mut sc[..3], 1, &mut tc);
                } else {
                    break;
                }
            }
            if tc.rounds_up(sc[0]) {
                limbs::add_word(&mut sc, 1);
            }
        } else {
            // `deficit` marks a truncation state that belongs to the
            // subtracted operand, so it counts against the magnitude
            let (mut tc, mut deficit) =
                if tb != Trunc::Exact { (tb, true) } else { (ta, false) };
            if limbs::sub(&mut sc[..3], &sa[..3], &sb[..3]) {
                limbs::negate(&mut sc[..3]);
                neg = rhs.neg;
                deficit = !deficit;
            }
            // the headroom digit of alignment can leave a 27-digit
            // difference; fold it back in before rounding
            loop {
                let test = limbs::cmp(&sc[..3], &dec::COEFF_MAX);
                if test == Ordering::Greater
                    || (test == Ordering::Equal && !deficit && tc.rounds_up(sc[0]))
                {
                    if ea == 127 {
                        return Err(DeciError::Overflow);
                    }
                    ea += 1;
                    let rem = limbs::div_word_assign(&mut sc[..3], 10);
                    tc = if deficit {
                        tc.compose_deficit(rem, 10)
                    } else {
                        tc.compose(rem, 10)
                    };
                    deficit = false;
                } else {
                    break;
                }
            }
            if !deficit {
                if tc.rounds_up(sc[0]) {
                    limbs::add_word(&mut sc, 1);
                }
            } else if tc.rounds_up(sc[0]) {
                limbs::sub_word(&mut sc, 1);
            }
        }
        Ok(Deci::raw([sc[0], sc[1], sc[2]], neg, ea as i8))
    }

    /// Difference of `self` and `rhs`.
    pub fn checked_sub(self, rhs: Deci) -> Result<Deci, DeciError> {
        self.checked_add(-rhs)
    }

    /// Product of `self` and `rhs`, correctly rounded half-to-even.
    pub fn checked_mul(self, rhs: Deci) -> Result<Deci, DeciError> {
        let neg = self.neg != rhs.neg;

        let mut p = [0u32; 6];
        limbs::mul(&mut p, &self.m, &rhs.m);

        let shift = dec::min_right_shift(&p);
        let e = self.exp as i32 + rhs.exp as i32 + shift;
        let mut tc = Trunc::Exact;
        if shift > 0 {
            dec::div_pow10(&mut p, shift, &mut tc);
            if tc.rounds_up(p[0]) && e >= -128 {
                limbs::add_word(&mut p, 1);
            }
        }

        let mut sc = [p[0], p[1], p[2], p[3]];
        let mut f = 0;
        rescale(&mut sc, &mut f, e, tc)?;
        Ok(Deci::raw([sc[0], sc[1], sc[2]], neg, f as i8))
    }

    /// Quotient of `self` and `rhs`, correctly rounded half-to-even.
    pub fn checked_div(self, rhs: Deci) -> Result<Deci, DeciError> {
        if rhs.is_zero() {
            return Err(DeciError::DivideByZero);
        }
        let neg = self.neg != rhs.neg;
        if self.is_zero() {
            return Ok(Deci::raw([0; 3], neg, 0));
        }

        // left-shift the dividend until the quotient carries full
        // precision (about 26 digits)
        let la = magnitude(&self.m).log10();
        let shift = (25.5 + magnitude(&rhs.m).log10() - la).ceil() as i32;
        let mut sa = [self.m[0], self.m[1], self.m[2], 0, 0, 0];
        dec::mul_pow10(&mut sa, shift);
        let mut e = self.exp as i32 - rhs.exp as i32 - shift;

        let sb = rhs.sig4();
        let na = active(&sa);
        let nb = active(&rhs.m);
        let mut q = [0u32; 6];
        let mut r = [0u32; 4];
        limbs::div_rem(&mut q[..na - nb + 1], &mut r[..nb], &sa[..na], &sb[..nb]);

        // squeeze the remainder into a truncation state: compare twice
        // the remainder against the divisor
        let mut r2 = [0u32; 4];
        limbs::mul_word(&mut r2[..nb + 1], &r[..nb], 2);
        let mut tc = match limbs::cmp(&r2[..nb + 1], &sb[..nb + 1]) {
            Ordering::Greater => Trunc::Above,
            Ordering::Equal => Trunc::Half,
            Ordering::Less if limbs::is_zero(&r2[..nb + 1]) => Trunc::Exact,
            Ordering::Less => Trunc::Below,
        };

        let shift = dec::min_right_shift(&q);
        if shift > 0 {
            dec::div_pow10(&mut q, shift, &mut tc);
            e += shift;
        }
        if tc.rounds_up(q[0]) && e >= -128 {
            limbs::add_word(&mut q, 1);
        }

        let mut sc = [q[0], q[1], q[2], q[3]];
        let mut f = 0;
        rescale(&mut sc, &mut f, e, tc)?;
        Ok(Deci::raw([sc[0], sc[1], sc[2]], neg, f as i8))
    }

    /// Remainder of `self` divided by `rhs`, carrying `rhs`'s exponent
    /// and `self`'s sign.
    pub fn checked_rem(self, rhs: Deci) -> Result<Deci, DeciError> {
        if rhs.is_zero() {
            return Err(DeciError::DivideByZero);
        }
        if self.is_zero() {
            return Ok(Deci::ZERO);
        }

        let mut sa = self.m;
        let mut sb = rhs.sig4();
        let mut be = rhs.exp as i32;
        let mut e = self.exp as i32 - be;
        if e < 0 {
            if dec::max_left_shift(&sb[..3]) < -e {
                // |self| < |rhs|
                return Ok(self);
            }
            dec::mul_pow10(&mut sb, -e);
            be = self.exp as i32;
            e = 0;
        }

        let nb = active(&sb[..3]);
        let mut p = [0u32; 6];
        let mut scratch = [0u32; 4];
        let input = sa;
        limbs::div_rem(&mut scratch[..3 - nb + 1], &mut sa[..nb], &input, &sb[..nb]);
        for limb in sa[nb..].iter_mut() {
            *limb = 0;
        }

        // remainder(sa * 10^e, sb) by repeated squaring of the power
        // accumulator, every intermediate reduced mod sb so the limb
        // counts stay bounded by nb
        let mut sc = [10u32, 0, 0];
        while e > 0 {
            if e % 2 == 1 {
                limbs::mul(&mut p[..2 * nb], &sa[..nb], &sc[..nb]);
                limbs::div_rem(&mut scratch[..nb + 1], &mut sa[..nb], &p[..2 * nb], &sb[..nb]);
                e -= 1;
            } else {
                limbs::mul(&mut p[..2 * nb], &sc[..nb], &sc[..nb]);
                limbs::div_rem(&mut scratch[..nb + 1], &mut sc[..nb], &p[..2 * nb], &sb[..nb]);
                e /= 2;
            }
        }

        Ok(Deci::raw(sa, self.neg, be as i8))
    }

    /// `self * 10^e`, flushing to zero on underflow.
    pub fn ldexp(self, e: i32) -> Result<Deci, DeciError> {
        let mut sa = self.sig4();
        let mut f = self.exp as i32;
        rescale(&mut sa, &mut f, e, Trunc::Exact)?;
        Ok(Deci::raw([sa[0], sa[1], sa[2]], self.neg, f as i8))
    }
}

impl Neg for Deci {
    type Output = Deci;

    fn neg(mut self) -> Deci {
        self.neg = !self.neg;
        self
    }
}

impl Add for Deci {
    type Output = Deci;

    fn add(self, rhs: Deci) -> Deci {
        self.checked_add(rhs).expect("attempt to add with overflow")
    }
}

impl Sub for Deci {
    type Output = Deci;

    fn sub(self, rhs: Deci) -> Deci {
        self.checked_sub(rhs).expect("attempt to subtract with overflow")
    }
}

impl Mul for Deci {
    type Output = Deci;

    fn mul(self, rhs: Deci) -> Deci {
        self.checked_mul(rhs).expect("attempt to multiply with overflow")
    }
}

impl Div for Deci {
    type Output = Deci;

    fn div(self, rhs: Deci) -> Deci {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Rem for Deci {
    type Output = Deci;

    fn rem(self, rhs: Deci) -> Deci {
        match self.checked_rem(rhs) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}
