//! Error types for colonyscan-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Operation requires a different sample format
    #[error("unsupported sample format: expected {expected}, got {actual}")]
    UnsupportedFormat {
        expected: &'static str,
        actual: &'static str,
    },

    /// Coordinate out of bounds
    #[error("coordinate out of bounds: ({row}, {col}) in {width}x{height}")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Border removal would consume the whole image
    #[error("border of {margin} too large for {width}x{height} raster")]
    BorderTooLarge { margin: u32, width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
