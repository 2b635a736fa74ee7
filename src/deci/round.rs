//! Rounding a value to a multiple of another.
//!
//! All nine modes share one skeleton: take the remainder, pick an
//! adjustment that lands on a neighbouring multiple, add it, and finally
//! re-express the result in the scale's exponent (exactly, since by then
//! it is a multiple). Half-way comparisons are done as `|b| - |c|`
//! against `|c|` so that `b / 2` is never materialized; half of an odd
//! significand has no exact encoding.

use crate::deci::Deci;
use crate::error::DeciError;
use crate::limbs::dec::{self, Trunc};

/// How [`Deci::round_to`] resolves values between two multiples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundMode {
    /// Toward zero.
    Truncate,
    /// Away from zero.
    Away,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// To nearest; ties go to the even multiple.
    HalfEven,
    /// To nearest; ties go away from zero.
    HalfAway,
    /// To nearest; ties go toward zero.
    HalfTruncate,
    /// To nearest; ties go toward positive infinity.
    HalfCeil,
    /// To nearest; ties go toward negative infinity.
    HalfFloor,
}

impl Deci {
    /// Rounds `self` to a multiple of `scale` under `mode`.
    ///
    /// Fails with [`DeciError::DivideByZero`] for a zero scale, and with
    /// [`DeciError::Overflow`] when stepping to the next multiple leaves
    /// the representable range.
    pub fn round_to(self, scale: Deci, mode: RoundMode) -> Result<Deci, DeciError> {
        let a = self;
        let c = a.checked_rem(scale)?;

        let adjust = match mode {
            RoundMode::Truncate => -c,
            RoundMode::Away => {
                if c.is_zero() {
                    -c
                } else {
                    (-c).checked_add(scale.with_sign(c.neg))?
                }
            }
            RoundMode::Floor => {
                let back = -c;
                if !back.neg && !back.is_zero() {
                    scale.with_sign(true).checked_add(back)?
                } else {
                    back
                }
            }
            RoundMode::Ceil => {
                let back = -c;
                if back.neg && !back.is_zero() {
                    scale.with_sign(false).checked_add(back)?
                } else {
                    back
                }
            }
            RoundMode::HalfEven => {
                let (ca, d) = split(c, scale)?;
                let toward_zero = if ca == d {
                    // an exact half: look one multiple further to find
                    // which neighbour is even
                    let twice = scale.abs().checked_add(scale.abs())?;
                    let f = a.checked_rem(twice)?.abs();
                    f <= scale.abs()
                } else {
                    ca <= d
                };
                if toward_zero {
                    ca.with_sign(!a.neg)
                } else {
                    d.with_sign(a.neg)
                }
            }
            RoundMode::HalfAway => {
                let (ca, d) = split(c, scale)?;
                if d <= ca {
                    d.with_sign(a.neg)
                } else {
                    ca.with_sign(!a.neg)
                }
            }
            RoundMode::HalfTruncate => {
                let (ca, d) = split(c, scale)?;
                if ca <= d {
                    ca.with_sign(!a.neg)
                } else {
                    d.with_sign(a.neg)
                }
            }
            RoundMode::HalfCeil => {
                let (ca, d) = split(c, scale)?;
                let toward_zero = if a.neg { ca <= d } else { !(d <= ca) };
                if toward_zero {
                    ca.with_sign(!a.neg)
                } else {
                    d.with_sign(a.neg)
                }
            }
            RoundMode::HalfFloor => {
                let (ca, d) = split(c, scale)?;
                let toward_zero = if a.neg { !(d <= ca) } else { ca <= d };
                if toward_zero {
                    ca.with_sign(!a.neg)
                } else {
                    d.with_sign(a.neg)
                }
            }
        };

        let rounded = a.checked_add(adjust)?;
        Ok(to_scale(rounded, scale))
    }
}

/// `(|c|, |scale| - |c|)`: the distances from `a` down and up to the
/// surrounding multiples.
fn split(c: Deci, scale: Deci) -> Result<(Deci, Deci), DeciError> {
    let ca = c.abs();
    let d = scale.abs().checked_add(-ca)?;
    Ok((ca, d))
}

/// Re-expresses a multiple of `scale` with `scale`'s exponent. The shift
/// discards only zeros, so no rounding state is kept.
fn to_scale(a: Deci, scale: Deci) -> Deci {
    if a.exp >= scale.exp {
        return a;
    }
    let mut sa = a.m;
    let mut t = Trunc::Exact;
    dec::div_pow10(&mut sa, scale.exp as i32 - a.exp as i32, &mut t);
    Deci::raw(sa, a.neg, scale.exp)
}
