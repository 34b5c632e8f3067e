//! Histogram generation
//!
//! Computes the intensity distribution of a grayscale raster. The
//! histogram always carries 256 bins; the sum of all bins equals the
//! pixel count of the source raster.

use super::{Raster, SampleFormat};
use crate::error::{Error, Result};

/// 256-bin intensity histogram
#[derive(Debug, Clone)]
pub struct Histogram {
    counts: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { counts: [0; 256] }
    }
}

impl Histogram {
    /// Create an empty histogram with all bins at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the count for one intensity value.
    #[inline]
    pub fn count(&self, value: u8) -> u32 {
        self.counts[value as usize]
    }

    /// Get all 256 bin counts.
    #[inline]
    pub fn counts(&self) -> &[u32; 256] {
        &self.counts
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Add one sample.
    #[inline]
    pub fn add(&mut self, value: u8) {
        self.counts[value as usize] += 1;
    }
}

impl Raster {
    /// Compute the intensity histogram of a grayscale raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the raster is not `Gray8`.
    ///
    /// # Example
    ///
    /// ```
    /// use colonyscan_core::{Raster, SampleFormat};
    ///
    /// let raster = Raster::new(10, 10, SampleFormat::Gray8).unwrap();
    /// let hist = raster.gray_histogram().unwrap();
    /// assert_eq!(hist.count(0), 100);
    /// assert_eq!(hist.total(), 100);
    /// ```
    pub fn gray_histogram(&self) -> Result<Histogram> {
        if self.format() != SampleFormat::Gray8 {
            return Err(Error::UnsupportedFormat {
                expected: SampleFormat::Gray8.name(),
                actual: self.format().name(),
            });
        }

        let mut hist = Histogram::new();
        for &sample in self.data() {
            hist.add(sample);
        }
        Ok(hist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts() {
        let mut m = Raster::new(4, 4, SampleFormat::Gray8).unwrap().to_mut();
        m.set(0, 0, 255).unwrap();
        m.set(1, 1, 255).unwrap();
        m.set(2, 2, 100).unwrap();
        let raster: Raster = m.into();

        let hist = raster.gray_histogram().unwrap();
        assert_eq!(hist.count(255), 2);
        assert_eq!(hist.count(100), 1);
        assert_eq!(hist.count(0), 13);
    }

    #[test]
    fn test_histogram_total_equals_pixel_count() {
        let data: Vec<u8> = (0..=255).cycle().take(37 * 23).map(|v| v as u8).collect();
        let raster = Raster::from_raw(37, 23, SampleFormat::Gray8, data).unwrap();

        let hist = raster.gray_histogram().unwrap();
        assert_eq!(hist.total(), 37 * 23);
    }

    #[test]
    fn test_histogram_rejects_rgb() {
        let raster = Raster::new(4, 4, SampleFormat::Rgb8).unwrap();
        assert!(raster.gray_histogram().is_err());
    }
}
