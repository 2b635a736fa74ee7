//! Fixed-precision decimal arithmetic for monetary values.
//!
//! A [`Deci`] is an exact base-10 number of the form
//! `(-1)^s * m * 10^e`, with up to 26 significant digits and an exponent
//! in `[-128, 127]`. The representation is unnormalized (one number has
//! many encodings), every operation is correctly rounded half-to-even
//! using only fixed-width integer arithmetic, and a value is 16 bytes of
//! plain `Copy` data: no heap, no globals, nothing shared.
//!
//! # Module overview
//!
//! - `limbs`
//!   Multi-word integer primitives over little-endian 32-bit limbs:
//!   comparison, carry/borrow propagation, schoolbook multiplication and
//!   Knuth-style long division. The `limbs::dec` submodule adds
//!   decimal-base shifting with the sticky truncation state that drives
//!   banker's rounding.
//!
//! - `deci`
//!   The value type and everything on top of the limb layer: exponent
//!   alignment, the arithmetic operators, rounding to a multiple under
//!   nine modes, the ordering relation on unnormalized encodings, and
//!   conversions to and from native integers, `f64`, text and the
//!   12-byte packed wire form.
//!
//! # Errors
//!
//! Two failure modes exist: [`DeciError::Overflow`] and
//! [`DeciError::DivideByZero`] (plus a parse variant for `FromStr`).
//! Underflow never fails — results that shrink out of range flush to
//! zero. The `checked_*` methods report errors; the operator traits
//! panic like the built-in integer operators do.
//!
//! ```
//! use deci::Deci;
//!
//! let a: Deci = "$1'000.05".parse().unwrap();
//! let b: Deci = "0.95".parse().unwrap();
//! assert_eq!(a + b, "1001".parse().unwrap());
//! ```

pub mod deci;
mod error;
pub mod limbs;

pub use deci::{Deci, RoundMode};
pub use error::DeciError;
