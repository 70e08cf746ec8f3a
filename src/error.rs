use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The operation cannot be performed on this matrix,
    /// e.g. inverting a matrix whose determinant is zero.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Malformed coefficients were supplied.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
