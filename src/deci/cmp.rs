//! The ordering relation on unnormalized encodings.
//!
//! Two encodings of one number can differ in every stored field, so the
//! relation aligns exponents first and applies banker's rounding to the
//! side that lost digits; only then are significands compared. Bit-level
//! identity is a separate predicate, [`Deci::is_same`].

use core::cmp::Ordering;

use crate::deci::norm::make_comparable;
use crate::deci::Deci;
use crate::limbs;
use crate::limbs::dec::Trunc;

impl Deci {
    /// Compares magnitudes after alignment and rounding, ignoring signs.
    fn magnitude_order(&self, rhs: &Deci) -> Ordering {
        let mut sa = self.sig4();
        let mut sb = rhs.sig4();
        let (mut ea, mut eb) = (self.exp as i32, rhs.exp as i32);
        let (mut ta, mut tb) = (Trunc::Exact, Trunc::Exact);
        make_comparable(&mut sa, &mut ea, &mut ta, &mut sb, &mut eb, &mut tb);

        // round the truncated side so every encoding of one value lands
        // on the same significand
        if ta.rounds_up(sa[0]) {
            limbs::add_word(&mut sa, 1);
        } else if tb.rounds_up(sb[0]) {
            limbs::add_word(&mut sb, 1);
        }
        limbs::cmp(&sa[..3], &sb[..3])
    }
}

impl PartialEq for Deci {
    fn eq(&self, other: &Deci) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Deci {
    fn partial_cmp(&self, other: &Deci) -> Option<Ordering> {
        Some(match (self.neg, other.neg) {
            (true, false) => {
                if self.is_zero() && other.is_zero() {
                    Ordering::Equal
                } else {
                    Ordering::Less
                }
            }
            (false, true) => {
                if self.is_zero() && other.is_zero() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            (false, false) => self.magnitude_order(other),
            (true, true) => self.magnitude_order(other).reverse(),
        })
    }
}
