//! Text parsing and formatting.
//!
//! The accepted grammar is the money-literal form: an optional sign, an
//! optional `$`, digits with `.` or `,` as the radix point and `'` as an
//! ignored group separator, then an optional `e`/`E` exponent. Digits
//! past the 26th are not stored; they only refine a truncation state so
//! the kept significand can be rounded half-to-even.
//!
//! Output picks fixed notation while the decimal point stays within six
//! leading zeros of the digits, and scientific notation otherwise.

use core::fmt;
use core::str::FromStr;

use crate::deci::norm::rescale;
use crate::deci::Deci;
use crate::error::DeciError;
use crate::limbs;
use crate::limbs::dec::{self, Trunc};

/// `10^25`: one more digit still fits below `10^26`.
const COEFF_FULL: u128 = 10_000_000_000_000_000_000_000_000;

impl Deci {
    /// Parses a literal from the start of `s`, returning the value and
    /// the number of bytes consumed.
    ///
    /// A prefix that contains no digit consumes nothing and yields zero,
    /// so callers can detect failure without an error path; only an
    /// exponent beyond the representable range is reported as
    /// [`DeciError::Overflow`].
    pub fn parse_partial(s: &str) -> Result<(Deci, usize), DeciError> {
        let t = s.as_bytes();
        let mut i = 0;

        let mut neg = false;
        match t.first() {
            Some(&b'+') => i += 1,
            Some(&b'-') => {
                neg = true;
                i += 1;
            }
            _ => {}
        }
        if t.get(i) == Some(&b'$') {
            i += 1;
        }

        let mut m: u128 = 0;
        let mut frac = 0i32; // stored digits after the point
        let mut spill = 0i32; // unstored digits before the point
        let mut saw_digit = false;
        let mut saw_point = false;
        let mut full = false;
        let mut t_flag = Trunc::Exact;
        while let Some(&ch) = t.get(i) {
            match ch {
                b'0'..=b'9' => {
                    saw_digit = true;
                    let d = (ch - b'0') as u128;
                    if m < COEFF_FULL {
                        m = m * 10 + d;
                        if saw_point {
                            frac += 1;
                        }
                    } else {
                        // past 26 digits: the first extra digit decides
                        // the state, later ones only refine it
                        if full {
                            if t_flag == Trunc::Exact && d != 0 {
                                t_flag = Trunc::Below;
                            } else if t_flag == Trunc::Half && d != 0 {
                                t_flag = Trunc::Above;
                            }
                        } else {
                            full = true;
                            if d > 0 {
                                t_flag = match d {
                                    1..=4 => Trunc::Below,
                                    5 => Trunc::Half,
                                    _ => Trunc::Above,
                                };
                            }
                        }
                        if !saw_point {
                            spill += 1;
                        }
                    }
                }
                b'.' | b',' => {
                    if saw_point {
                        return Ok((Deci::ZERO, 0));
                    }
                    saw_point = true;
                }
                b'\'' => {}
                _ => break,
            }
            i += 1;
        }
        if !saw_digit {
            return Ok((Deci::ZERO, 0));
        }

        let mut e: i32 = 0;
        let mut es = 1i32;
        if matches!(t.get(i), Some(&(b'e' | b'E'))) {
            i += 1;
            match t.get(i) {
                Some(&b'+') => i += 1,
                Some(&b'-') => {
                    es = -1;
                    i += 1;
                }
                _ => {}
            }
            while let Some(&ch) = t.get(i) {
                if !ch.is_ascii_digit() {
                    break;
                }
                e = e * 10 + (ch - b'0') as i32;
                if e > 200_000_000 {
                    if es == 1 {
                        return Err(DeciError::Overflow);
                    }
                    e = 200_000_000;
                }
                i += 1;
            }
        }
        let mut e = e * es + spill - frac;

        let mut sm = [m as u32, (m >> 32) as u32, (m >> 64) as u32, 0];
        // round the unstored tail before rescaling
        if t_flag.rounds_up(sm[0]) && e >= -128 {
            if limbs::cmp(&sm[..3], &dec::COEFF_MAX) == core::cmp::Ordering::Less {
                limbs::add_word(&mut sm, 1);
            } else {
                dec::div_pow10(&mut sm[..3], 1, &mut t_flag);
                e += 1;
                if t_flag.rounds_up(sm[0]) {
                    limbs::add_word(&mut sm, 1);
                }
            }
        }

        let mut f = 0;
        rescale(&mut sm, &mut f, e, t_flag)?;
        Ok((Deci::raw([sm[0], sm[1], sm[2]], neg, f as i8), i))
    }

    /// Renders the value with an optional currency symbol and the given
    /// radix-point character.
    pub fn format(&self, symbol: Option<char>, point: char) -> String {
        let mut out = String::new();
        if self.neg {
            out.push('-');
        }
        if let Some(sym) = symbol {
            out.push(sym);
        }
        if self.is_zero() {
            out.push('0');
            return out;
        }

        let digits = self.coeff().to_string();
        let j = digits.len() as i32;
        let ep = j + self.exp as i32;

        if ep > j {
            // positive exponent: keep the stored form, digits then `e`
            out.push_str(&digits);
            out.push('e');
            out.push_str(&(ep - j).to_string());
        } else if ep > 0 {
            let (int_part, frac_part) = digits.split_at(ep as usize);
            out.push_str(int_part);
            if !frac_part.is_empty() {
                out.push(point);
                out.push_str(frac_part);
            }
        } else if ep > -6 {
            out.push('0');
            out.push(point);
            for _ in 0..-ep {
                out.push('0');
            }
            out.push_str(&digits);
        } else {
            // one digit ahead of the point, the rest behind it
            out.push_str(&digits[..1]);
            if j > 1 {
                out.push(point);
                out.push_str(&digits[1..]);
            }
            out.push('e');
            out.push_str(&(ep - 1).to_string());
        }
        out
    }
}

impl FromStr for Deci {
    type Err = DeciError;

    fn from_str(s: &str) -> Result<Deci, DeciError> {
        let (value, consumed) = Deci::parse_partial(s)?;
        if consumed == 0 || consumed != s.len() {
            return Err(DeciError::Parse);
        }
        Ok(value)
    }
}

impl fmt::Display for Deci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(None, '.'))
    }
}
