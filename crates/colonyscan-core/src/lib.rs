//! colonyscan-core - Raster data structures for the colonyscan blob finder
//!
//! This crate provides the image container shared by every pipeline stage:
//!
//! - [`Raster`] / [`RasterMut`] - row-major 8-bit image with shared and
//!   exclusive ownership forms
//! - [`Histogram`] - 256-bin intensity distribution
//! - Border padding, pixel access, and grayscale conversion
//!
//! # Example
//!
//! ```
//! use colonyscan_core::{Raster, SampleFormat};
//!
//! let raster = Raster::new(640, 480, SampleFormat::Gray8).unwrap();
//! assert_eq!(raster.width(), 640);
//! assert_eq!(raster.height(), 480);
//! ```

mod error;
mod raster;

pub use error::{Error, Result};
pub use raster::{Histogram, Raster, RasterMut, SampleFormat};

/// Sample value of a background (non-object) pixel in a binary mask.
pub const BACKGROUND: u8 = 0;

/// Sample value of a foreground (object) pixel in a binary mask.
pub const FOREGROUND: u8 = 255;
