//! colonyscan-threshold - Global thresholding for colonyscan
//!
//! Converts grayscale rasters to binary masks:
//!
//! - **Otsu threshold selection** - histogram-based automatic cut point
//! - **Fixed-threshold binarization** - strictly-greater per-pixel map
//!
//! # Example
//!
//! ```
//! use colonyscan_core::{FOREGROUND, Raster, SampleFormat};
//! use colonyscan_threshold::binarize;
//!
//! let mut data = vec![20u8; 50];
//! data.extend(vec![200u8; 50]);
//! let gray = Raster::from_raw(10, 10, SampleFormat::Gray8, data).unwrap();
//!
//! let (mask, threshold) = binarize(&gray).unwrap();
//! assert!(threshold >= 20 && threshold < 200);
//! assert_eq!(mask.data().iter().filter(|&&s| s == FOREGROUND).count(), 50);
//! ```

mod binarize;
mod error;
mod otsu;

pub use binarize::{apply_threshold, binarize};
pub use error::{ThresholdError, ThresholdResult};
pub use otsu::otsu_threshold;
