//! Exponent alignment and rescaling.

use core::cmp::Ordering;

use crate::error::DeciError;
use crate::limbs;
use crate::limbs::dec::{self, Trunc};

/// Brings two significands to a common exponent.
///
/// The larger-exponent operand is shifted left as far as its headroom
/// allows, plus one extra digit so that a following addition may carry;
/// whatever gap remains is closed by right-shifting the other operand,
/// recording the loss in its truncation state. A residual gap beyond 26
/// digits underflows the smaller operand to zero outright.
pub(crate) fn make_comparable(
    a: &mut [u32; 4],
    ea: &mut i32,
    ta: &mut Trunc,
    b: &mut [u32; 4],
    eb: &mut i32,
    tb: &mut Trunc,
) {
    *ta = Trunc::Exact;
    *tb = Trunc::Exact;

    if *ea == *eb {
        return;
    }
    if *ea < *eb {
        return make_comparable(b, eb, tb, a, ea, ta);
    }

    if limbs::is_zero(&a[..3]) {
        *ea = *eb;
        return;
    }
    let headroom = dec::max_left_shift(&a[..3]) + 1;
    let shift = headroom.min(*ea - *eb);
    dec::mul_pow10(a, shift);
    *ea -= shift;

    let residual = *ea - *eb;
    if residual == 0 {
        return;
    }
    if residual > 26 {
        // the smaller operand underflows entirely
        if !limbs::is_zero(&b[..3]) {
            *tb = Trunc::Below;
        }
        b.fill(0);
        *eb = *ea;
        return;
    }
    dec::div_pow10(&mut b[..3], residual, tb);
    *eb = *ea;
}

/// Applies `e` additional decimal places to a significand whose current
/// exponent is `*f`, clamping back into the storable exponent range.
///
/// Shortfall below `-128` is absorbed by right-shifting (rounding with
/// the pending truncation state `t`); past 26 shifted-out digits the
/// value flushes to zero. Excess above `127` is absorbed by left
/// shifting while the significand has room, and is an overflow
/// otherwise.
pub(crate) fn rescale(
    a: &mut [u32; 4],
    f: &mut i32,
    e: i32,
    t: Trunc,
) -> Result<(), DeciError> {
    if limbs::is_zero(&a[..3]) {
        *f = 0;
        return Ok(());
    }

    if e >= 281 {
        return Err(DeciError::Overflow);
    }
    let e = if e < -281 { -282 } else { e };
    *f += e;

    if *f < -128 {
        if *f < -154 {
            a.fill(0);
            *f = 0;
            return Ok(());
        }
        let mut t = t;
        dec::div_pow10(&mut a[..3], -128 - *f, &mut t);
        *f = -128;
        if t.rounds_up(a[0]) {
            limbs::add_word(a, 1);
        }
        return Ok(());
    }

    if *f > 127 {
        if *f >= 153
            || limbs::cmp(&dec::POW10[(153 - *f) as usize], &a[..3]) != Ordering::Greater
        {
            return Err(DeciError::Overflow);
        }
        dec::mul_pow10(a, *f - 127);
        *f = 127;
    }
    Ok(())
}
