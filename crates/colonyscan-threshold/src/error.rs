//! Error types for colonyscan-threshold

use thiserror::Error;

/// Errors that can occur during threshold operations
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] colonyscan_core::Error),

    /// Unsupported sample format for this operation
    #[error("unsupported sample format: expected {expected}, got {actual}")]
    UnsupportedFormat {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
