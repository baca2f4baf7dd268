//! Error type shared by every operation in this crate.

use thiserror::Error;

/// Errors raised by Eisenstein integer and fraction arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EisensteinError {
    /// A value that must be an integer (or an Eisenstein integer) was not.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A divisor or denominator has norm zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The Euclidean loop hit its configured iteration bound.
    #[error("gcd did not converge within {0} iterations")]
    GcdDidNotConverge(usize),
}

/// Result alias for fallible Eisenstein operations.
pub type Result<T> = std::result::Result<T, EisensteinError>;

impl EisensteinError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
