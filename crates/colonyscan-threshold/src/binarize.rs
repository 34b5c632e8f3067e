//! Binary thresholding
//!
//! Converts a grayscale raster to a two-level mask. Samples strictly
//! greater than the threshold become [`FOREGROUND`], everything else
//! [`BACKGROUND`].

use crate::error::{ThresholdError, ThresholdResult};
use crate::otsu::otsu_threshold;
use colonyscan_core::{BACKGROUND, FOREGROUND, Raster, SampleFormat};

/// Convert a grayscale raster to a binary mask using a fixed threshold.
///
/// A pure per-pixel map: `sample > threshold` yields `FOREGROUND`, else
/// `BACKGROUND`. Applying the result to itself with the same threshold
/// is a no-op (FOREGROUND stays above any threshold < 255, BACKGROUND
/// below any).
///
/// # Errors
///
/// Returns [`ThresholdError::UnsupportedFormat`] if the raster is not
/// `Gray8`.
pub fn apply_threshold(raster: &Raster, threshold: u8) -> ThresholdResult<Raster> {
    if raster.format() != SampleFormat::Gray8 {
        return Err(ThresholdError::UnsupportedFormat {
            expected: SampleFormat::Gray8.name(),
            actual: raster.format().name(),
        });
    }

    let data = raster
        .data()
        .iter()
        .map(|&s| if s > threshold { FOREGROUND } else { BACKGROUND })
        .collect();

    Ok(Raster::from_raw(
        raster.width(),
        raster.height(),
        SampleFormat::Gray8,
        data,
    )?)
}

/// Convert a grayscale raster to a binary mask with an automatically
/// selected threshold.
///
/// Builds the intensity histogram, selects the cut with
/// [`otsu_threshold`], and applies it. Returns the mask together with
/// the threshold that produced it.
pub fn binarize(raster: &Raster) -> ThresholdResult<(Raster, u8)> {
    let hist = raster.gray_histogram()?;
    let threshold = otsu_threshold(&hist);
    let mask = apply_threshold(raster, threshold)?;
    Ok((mask, threshold))
}
