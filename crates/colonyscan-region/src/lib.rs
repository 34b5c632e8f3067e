//! colonyscan-region - Blob extraction for colonyscan
//!
//! This crate provides the tracing half of the pipeline:
//!
//! - **Region tracing** - Moore-neighbor boundary following with
//!   tri-state in-place marking
//! - **Blob scanning** - raster scan that seeds traces and filters
//!   regions by traced perimeter
//! - **Overlay rendering** - painting retained boundaries onto a copy
//!   of the source image
//!
//! # Example
//!
//! ```
//! use colonyscan_core::{FOREGROUND, Raster, SampleFormat};
//! use colonyscan_region::find_blobs;
//!
//! // A 3x3 foreground square in an 8x8 mask
//! let mut m = Raster::new(8, 8, SampleFormat::Gray8).unwrap().to_mut();
//! for row in 2..5 {
//!     for col in 2..5 {
//!         m.set(row, col, FOREGROUND).unwrap();
//!     }
//! }
//! let mask: Raster = m.into();
//!
//! let regions = find_blobs(&mask, 5, 10).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].len(), 8);
//! ```

mod error;
mod render;
mod scan;
mod trace;

pub use error::{RegionError, RegionResult};
pub use render::{Color, render_regions};
pub use scan::{TRACE_MARGIN, find_blobs, find_contours, scan_regions};
pub use trace::{Region, TracePoint, VISITED, trace_region};
