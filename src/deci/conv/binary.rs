//! The 12-byte packed wire form.
//!
//! Big-endian packing of the three stored fields into 96 bits: the top
//! byte holds the sign bit and the upper seven exponent bits, the next
//! byte the low exponent bit and the top seven significand bits, and the
//! remaining ten bytes the rest of the significand. Decoding checks that
//! the significand stays below `10^26`; every other bit pattern in those
//! fields is a valid (possibly non-canonical) value.

use core::cmp::Ordering;

use crate::deci::Deci;
use crate::error::DeciError;
use crate::limbs;
use crate::limbs::dec;

impl Deci {
    /// Packs the value into its 12-byte big-endian wire form.
    pub fn to_be_bytes(&self) -> [u8; 12] {
        let e = self.exp as u8;
        let mut out = [0u8; 12];
        out[0] = (self.neg as u8) << 7 | e >> 1;
        out[1] = e << 7 | (self.m[2] >> 16) as u8;
        out[2] = (self.m[2] >> 8) as u8;
        out[3] = self.m[2] as u8;
        out[4..8].copy_from_slice(&self.m[1].to_be_bytes());
        out[8..12].copy_from_slice(&self.m[0].to_be_bytes());
        out
    }

    /// Unpacks a 12-byte big-endian wire form.
    ///
    /// Fails with [`DeciError::Overflow`] when the encoded significand
    /// reaches `10^26`.
    pub fn from_be_bytes(b: [u8; 12]) -> Result<Deci, DeciError> {
        let neg = b[0] >> 7 == 1;
        let exp = (b[0] << 1 | b[1] >> 7) as i8;
        let m2 = ((b[1] & 0x7f) as u32) << 16 | (b[2] as u32) << 8 | b[3] as u32;
        let m1 = u32::from_be_bytes([b[4], b[5], b[6], b[7]]);
        let m0 = u32::from_be_bytes([b[8], b[9], b[10], b[11]]);

        let m = [m0, m1, m2];
        if limbs::cmp(&m, &dec::COEFF_MAX) == Ordering::Greater {
            return Err(DeciError::Overflow);
        }
        Ok(Deci::raw(m, neg, exp))
    }
}
