//! Conversions between `Deci` and binary floating point.
//!
//! A double travels through its shortest decimal representation (ryu),
//! which the text parser then reads exactly; this keeps 0.1_f64 landing
//! on the decimal 0.1 rather than on its binary expansion. The reverse
//! direction renders the value and lets the platform's float parser do
//! the correctly rounded binary conversion.

use crate::deci::Deci;
use crate::error::DeciError;

impl TryFrom<f64> for Deci {
    type Error = DeciError;

    /// Fails with [`DeciError::Overflow`] for NaN, infinities and finite
    /// values beyond `(10^26 - 1) * 10^127`; values below the smallest
    /// positive deci flush to zero.
    fn try_from(v: f64) -> Result<Deci, DeciError> {
        if !v.is_finite() {
            return Err(DeciError::Overflow);
        }
        let mut buf = ryu::Buffer::new();
        let (value, _) = Deci::parse_partial(buf.format_finite(v))?;
        Ok(value)
    }
}

impl From<Deci> for f64 {
    fn from(a: Deci) -> f64 {
        // the rendered form is always a valid float literal
        a.to_string().parse().unwrap()
    }
}
