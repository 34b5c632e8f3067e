//! colonyscan-test - Regression test framework for colonyscan
//!
//! Tracks a sequence of value and raster comparisons within one
//! regression test and reports a summary at the end:
//!
//! ```ignore
//! use colonyscan_test::RegParams;
//!
//! let mut rp = RegParams::new("blobs");
//! rp.compare_values(8.0, regions[0].len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to run without failing on
//!   mismatches; anything else compares.

mod params;

pub use params::{RegParams, RegTestMode};
