//! Raster - The image container
//!
//! The `Raster` structure is the fundamental image type in colonyscan.
//! It stores 8-bit samples in row-major order and supports single-channel
//! grayscale and interleaved RGB data.
//!
//! # Sample layout
//!
//! - One byte per sample, rows stored contiguously
//! - Addressing is `(row, col)`, row 0 at the top
//! - RGB data is interleaved: `r, g, b, r, g, b, ...`
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify sample data, convert to [`RasterMut`] via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

mod access;
mod border;
mod convert;
mod histogram;

pub use histogram::Histogram;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Sample format (channels per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Single-channel 8-bit intensity
    Gray8,
    /// Interleaved 8-bit red, green, blue
    Rgb8,
}

impl SampleFormat {
    /// Get the number of bytes per pixel.
    #[inline]
    pub fn samples(self) -> usize {
        match self {
            SampleFormat::Gray8 => 1,
            SampleFormat::Rgb8 => 3,
        }
    }

    /// Short name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            SampleFormat::Gray8 => "gray8",
            SampleFormat::Rgb8 => "rgb8",
        }
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Sample format
    format: SampleFormat,
    /// Row-major sample data, `width * height * samples` bytes
    data: Vec<u8>,
}

impl RasterData {
    #[inline]
    fn row_bytes(&self) -> usize {
        self.width as usize * self.format.samples()
    }
}

/// Raster - Main image container
///
/// `Raster` is the image type passed between pipeline stages. It uses
/// reference counting via `Arc`, so `clone()` is cheap and shares the
/// underlying samples.
///
/// # Examples
///
/// ```
/// use colonyscan_core::{Raster, SampleFormat};
///
/// let raster = Raster::new(100, 200, SampleFormat::Gray8).unwrap();
/// assert_eq!(raster.get(50, 50), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the given dimensions and format.
    ///
    /// All samples are initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, format: SampleFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = width as usize * height as usize * format.samples();
        let inner = RasterData {
            width,
            height,
            format,
            data: vec![0u8; size],
        };

        Ok(Raster {
            inner: Arc::new(inner),
        })
    }

    /// Create a raster from an existing sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::InvalidParameter`] if the buffer length does not match
    /// `width * height * samples`.
    pub fn from_raw(width: u32, height: u32, format: SampleFormat, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * format.samples();
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "sample buffer has {} bytes, expected {}",
                data.len(),
                expected
            )));
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                format,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the sample format.
    #[inline]
    pub fn format(&self) -> SampleFormat {
        self.inner.format
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        let rb = self.inner.row_bytes();
        let start = row as usize * rb;
        &self.inner.data[start..start + rb]
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two rasters have the same width, height, and format.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.format == other.inner.format
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        let inner = RasterData {
            width: self.inner.width,
            height: self.inner.height,
            format: self.inner.format,
            data: self.inner.data.clone(),
        };

        Raster {
            inner: Arc::new(inner),
        }
    }

    /// Try to get mutable access to the sample data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always copies, so the original is left untouched.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                format: self.inner.format,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Holds its sample data exclusively, so mutation needs no synchronization.
/// Convert back to a shared [`Raster`] with `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the sample format.
    #[inline]
    pub fn format(&self) -> SampleFormat {
        self.inner.format
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable raw access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [u8] {
        let rb = self.inner.row_bytes();
        let start = row as usize * rb;
        &mut self.inner.data[start..start + rb]
    }

    /// Set every sample to the given value.
    pub fn fill(&mut self, val: u8) {
        self.inner.data.fill(val);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_format() {
        assert_eq!(SampleFormat::Gray8.samples(), 1);
        assert_eq!(SampleFormat::Rgb8.samples(), 3);
        assert_eq!(SampleFormat::Gray8.name(), "gray8");
    }

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200, SampleFormat::Gray8).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.format(), SampleFormat::Gray8);
        assert_eq!(raster.data().len(), 100 * 200);

        let rgb = Raster::new(10, 10, SampleFormat::Rgb8).unwrap();
        assert_eq!(rgb.data().len(), 300);
    }

    #[test]
    fn test_raster_creation_invalid() {
        assert!(Raster::new(0, 100, SampleFormat::Gray8).is_err());
        assert!(Raster::new(100, 0, SampleFormat::Gray8).is_err());
    }

    #[test]
    fn test_from_raw() {
        let raster = Raster::from_raw(2, 2, SampleFormat::Gray8, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(raster.get(0, 1), Some(2));
        assert_eq!(raster.get(1, 0), Some(3));

        assert!(Raster::from_raw(2, 2, SampleFormat::Gray8, vec![1, 2, 3]).is_err());
        assert!(Raster::from_raw(0, 2, SampleFormat::Gray8, vec![]).is_err());
    }

    #[test]
    fn test_clone_shares_data() {
        let r1 = Raster::new(100, 100, SampleFormat::Gray8).unwrap();
        let r2 = r1.clone();

        assert_eq!(r1.ref_count(), 2);
        assert_eq!(r1.data().as_ptr(), r2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let r1 = Raster::new(100, 100, SampleFormat::Gray8).unwrap();
        let r2 = r1.deep_clone();

        assert_eq!(r1.ref_count(), 1);
        assert_eq!(r2.ref_count(), 1);
        assert_ne!(r1.data().as_ptr(), r2.data().as_ptr());
    }

    #[test]
    fn test_try_into_mut() {
        let raster = Raster::new(10, 10, SampleFormat::Gray8).unwrap();
        let mut m = raster.try_into_mut().unwrap();
        m.set(3, 4, 42).unwrap();

        let raster: Raster = m.into();
        assert_eq!(raster.get(3, 4), Some(42));

        // A shared raster cannot be unwrapped
        let shared = raster.clone();
        assert!(raster.try_into_mut().is_err());
        drop(shared);
    }

    #[test]
    fn test_row_access() {
        let raster = Raster::from_raw(3, 2, SampleFormat::Gray8, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.row(0), &[1, 2, 3]);
        assert_eq!(raster.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_sizes_equal() {
        let r1 = Raster::new(100, 200, SampleFormat::Gray8).unwrap();
        let r2 = Raster::new(100, 200, SampleFormat::Gray8).unwrap();
        let r3 = Raster::new(100, 200, SampleFormat::Rgb8).unwrap();
        let r4 = Raster::new(50, 200, SampleFormat::Gray8).unwrap();

        assert!(r1.sizes_equal(&r2));
        assert!(!r1.sizes_equal(&r3));
        assert!(!r1.sizes_equal(&r4));
    }

    #[test]
    fn test_fill() {
        let mut m = Raster::new(4, 4, SampleFormat::Gray8).unwrap().to_mut();
        m.fill(7);
        assert!(m.data().iter().all(|&s| s == 7));
    }
}
