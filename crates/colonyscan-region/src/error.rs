//! Error types for colonyscan-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] colonyscan_core::Error),

    /// Threshold library error
    #[error("threshold error: {0}")]
    Threshold(#[from] colonyscan_threshold::ThresholdError),

    /// Trace seeded on a pixel that is not foreground
    #[error("invalid trace seed: ({row}, {col})")]
    InvalidSeed { row: u32, col: u32 },

    /// Unsupported sample format for this operation
    #[error("unsupported sample format: expected {expected}, got {actual}")]
    UnsupportedFormat {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
