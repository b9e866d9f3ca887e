//! Error types for dataset generation and projection.

use thiserror::Error;

/// Errors from dataset generation and vector projection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScatterError {
    /// Generator called with a dimensionality of zero.
    #[error("dimensions must be at least 1, got {0}")]
    InvalidDimensions(usize),

    /// Projector given a vector too short to fill three axis blocks.
    #[error("cannot project a vector of length {0} onto 3 axes (need at least 3)")]
    VectorTooShort(usize),
}

/// Result alias used throughout the crate.
pub type ScatterResult<T> = Result<T, ScatterError>;
