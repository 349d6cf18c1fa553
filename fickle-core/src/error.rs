//! Error types for Fickle.
//!
//! All validation happens when variants are built or added, so these errors
//! never surface from a dispatch call:
//!
//! - [`ChaosError`] - Top-level error type for all Fickle operations
//! - [`ArgumentError`] - A weight or cumulative range that cannot be used

use thiserror::Error;

/// Shorthand for results of construction and mutation operations.
pub type ChaosResult<T> = Result<T, ChaosError>;

/// Top-level error type for all Fickle operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChaosError {
    /// A weight or the resulting range was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// A required callable or variant was absent.
    #[error("null reference: {0}")]
    NullReference(&'static str),
}

impl ChaosError {
    /// Returns `true` for [`ChaosError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ChaosError::InvalidArgument(_))
    }

    /// Returns `true` for [`ChaosError::NullReference`].
    pub fn is_null_reference(&self) -> bool {
        matches!(self, ChaosError::NullReference(_))
    }
}

/// Reasons a weight or range is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ArgumentError {
    /// The weight was NaN or infinite.
    #[error("weight cannot be infinite or NaN (got {0})")]
    NonFiniteWeight(f64),

    /// The weight was zero or negative.
    #[error("weight must be greater than 0 (got {0})")]
    NonPositiveWeight(f64),

    /// Summing the weights overflowed.
    #[error("range is infinite")]
    InfiniteRange,

    /// Every supplied variant was absent.
    #[error("must provide at least one valid function")]
    NoVariants,
}
