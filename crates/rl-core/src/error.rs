//! Error types for RayLab

use thiserror::Error;

/// RayLab error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error (non-positive counts, empty samples, bad arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Degenerate sample (zero-width histogram range)
    #[error("Degenerate sample: {0}")]
    DegenerateSample(String),

    /// Computation error (zero theoretical density and friends)
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
