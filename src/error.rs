use thiserror::Error;

/// Top-level error type for the vector and path primitives.
#[derive(Debug, Error, PartialEq)]
pub enum VecpathError {
    #[error("division by zero: cannot divide {0} by a zero scalar")]
    DivisionByZero(&'static str),

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("invalid tolerance {0}: must be a non-negative number")]
    InvalidTolerance(f64),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience type alias for results using [`VecpathError`].
pub type Result<T> = std::result::Result<T, VecpathError>;
