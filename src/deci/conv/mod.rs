//! Conversions between `Deci` and foreign representations.
//!
//! One file per representation: native integers, binary floating point,
//! human-readable text and the 12-byte packed wire form.

mod binary;
mod float;
mod int;
mod text;
