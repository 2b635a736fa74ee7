//! Error type shared by every fallible kernel operation.

use thiserror::Error;

/// Failures surfaced by the arithmetic kernel.
///
/// Underflow is deliberately absent: a value that shrinks below the
/// representable range flushes to zero instead of failing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum DeciError {
    /// An exponent or significand left the representable range.
    #[error("decimal overflow")]
    Overflow,
    /// Division or modulus by zero.
    #[error("division by zero")]
    DivideByZero,
    /// A literal could not be parsed as a decimal.
    #[error("invalid decimal literal")]
    Parse,
}
