//! Colonyscan - blob boundary extraction for micrographs
//!
//! Colonyscan isolates small roughly-circular objects in a binarized
//! image by tracing the outer boundary of every connected foreground
//! region and keeping those whose traced perimeter falls inside a
//! length range:
//!
//! - Global threshold selection (Otsu's method)
//! - Binarization and border padding
//! - Moore-neighbor boundary tracing with in-place visited marking
//! - Perimeter-range filtering and overlay rendering
//! - PNG / binary PNM file I/O
//!
//! # Example
//!
//! ```
//! use colonyscan::{Raster, SampleFormat};
//! use colonyscan::region::find_contours;
//!
//! // A bright spot on a dark background
//! let mut m = Raster::new(5, 5, SampleFormat::Gray8).unwrap().to_mut();
//! m.set(2, 2, 200).unwrap();
//! let gray: Raster = m.into();
//!
//! let regions = find_contours(&gray, 1, 10).unwrap();
//! assert_eq!(regions.len(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use colonyscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use colonyscan_io as io;
pub use colonyscan_region as region;
pub use colonyscan_threshold as threshold;
