//! Blob scanning
//!
//! Raster-scans a padded trace mask for untraced foreground regions,
//! traces each one, and keeps those whose traced perimeter falls inside
//! an inclusive length range. An outside-any-region flag avoids
//! re-seeding inside regions that were already traced, without a prior
//! pass over every pixel's visited status.

use crate::error::{RegionError, RegionResult};
use crate::trace::{Region, trace_region};
use colonyscan_core::{BACKGROUND, FOREGROUND, Raster, RasterMut, SampleFormat};
use colonyscan_threshold::binarize;

/// Border width added around the mask before scanning.
///
/// One background pixel on every side is enough to keep the tracer's
/// 8-neighborhood in bounds and off the outer frame.
pub const TRACE_MARGIN: u32 = 1;

/// Scan a padded trace mask and collect regions within the length range.
///
/// Scans rows then columns, skipping the outer `margin`. The scan keeps
/// an outside-any-region flag: a background pixel re-arms it, a visited
/// pixel clears it, and a trace is seeded only on a foreground pixel
/// seen while it is armed. The flag deliberately carries across row
/// boundaries, as every interior row of a padded mask starts next to
/// background anyway.
///
/// Regions whose traced perimeter lies in `lower..=upper` are returned;
/// all others are discarded, their pixels left permanently visited so
/// they are never retraced.
pub fn scan_regions(
    mask: &mut RasterMut,
    margin: u32,
    lower: usize,
    upper: usize,
) -> RegionResult<Vec<Region>> {
    if mask.format() != SampleFormat::Gray8 {
        return Err(RegionError::UnsupportedFormat {
            expected: SampleFormat::Gray8.name(),
            actual: mask.format().name(),
        });
    }

    let mut regions = Vec::new();
    let mut outside = true;

    for row in margin..mask.height().saturating_sub(margin) {
        for col in margin..mask.width().saturating_sub(margin) {
            if outside && mask.get_unchecked(row, col) == FOREGROUND {
                let region = trace_region(mask, row, col, margin)?;
                if (lower..=upper).contains(&region.len()) {
                    regions.push(region);
                }
            }

            // Re-read: a trace just marked this pixel visited.
            let sample = mask.get_unchecked(row, col);
            if sample != BACKGROUND && sample != FOREGROUND {
                outside = false;
            }
            if sample == BACKGROUND {
                outside = true;
            }
        }
    }

    Ok(regions)
}

/// Find blobs in an un-padded binary mask.
///
/// Pads the mask with [`TRACE_MARGIN`] background pixels on every side
/// and scans it. The returned paths are in the coordinate space of the
/// un-padded mask.
pub fn find_blobs(mask: &Raster, lower: usize, upper: usize) -> RegionResult<Vec<Region>> {
    let mut work = mask
        .add_border(TRACE_MARGIN, BACKGROUND)
        .try_into_mut()
        .unwrap();
    scan_regions(&mut work, TRACE_MARGIN, lower, upper)
}

/// Find contours in a grayscale image.
///
/// The single entry point of the pipeline: binarizes the image with an
/// automatically selected global threshold, pads the mask, and scans it
/// for regions whose traced perimeter lies in `lower..=upper`. An empty
/// result set is a valid outcome, not an error.
///
/// # Example
///
/// ```
/// use colonyscan_core::{Raster, SampleFormat};
/// use colonyscan_region::find_contours;
///
/// let mut m = Raster::new(5, 5, SampleFormat::Gray8).unwrap().to_mut();
/// m.set(2, 2, 200).unwrap();
/// let gray: Raster = m.into();
///
/// let regions = find_contours(&gray, 1, 10).unwrap();
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].len(), 1);
/// ```
pub fn find_contours(gray: &Raster, lower: usize, upper: usize) -> RegionResult<Vec<Region>> {
    let (mask, _) = binarize(gray)?;
    find_blobs(&mask, lower, upper)
}
