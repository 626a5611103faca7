//! Error types for sorta-playback.

use thiserror::Error;

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when configuring a playback session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Algorithm lookup or step validation failed
    #[error(transparent)]
    Algorithm(#[from] sorta_algorithms::Error),

    /// Comparison mode needs between `min` and `max` lanes
    #[error("comparison needs {min}..={max} algorithms, got {actual}")]
    LaneCount { min: usize, max: usize, actual: usize },

    /// No lane at this position
    #[error("lane {index} out of range ({lanes} lanes)")]
    LaneIndex { index: usize, lanes: usize },

    /// Input longer than the configured maximum
    #[error("input of length {len} exceeds maximum of {max}")]
    InputTooLarge { len: usize, max: usize },
}
