//! Error types for sorta-algorithms.

use thiserror::Error;

use crate::step::StepKind;

/// Result type for sorta-algorithms operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when resolving algorithms or checking steps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No algorithm is registered under this display name.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A step names a position outside the array.
    #[error("step index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A step's indices/values do not fit its kind.
    #[error("malformed {0} step")]
    MalformedStep(StepKind),
}
