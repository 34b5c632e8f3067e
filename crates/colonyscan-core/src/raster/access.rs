//! Pixel access functions
//!
//! Bounds-checked and unchecked sample access for both raster forms.
//! Grayscale samples use `get`/`set`; RGB pixels use `get_rgb`/`set_rgb`.

use super::{Raster, RasterMut, SampleFormat};
use crate::error::{Error, Result};

impl Raster {
    /// Get the intensity sample at `(row, col)`.
    ///
    /// Returns `None` if the coordinate is out of bounds or the raster
    /// is not grayscale.
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if self.format() != SampleFormat::Gray8 || row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.data()[row as usize * self.width() as usize + col as usize])
    }

    /// Get the intensity sample at `(row, col)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> u8 {
        self.data()[row as usize * self.width() as usize + col as usize]
    }

    /// Get the RGB pixel at `(row, col)`.
    ///
    /// Returns `None` if the coordinate is out of bounds or the raster
    /// is not RGB.
    pub fn get_rgb(&self, row: u32, col: u32) -> Option<(u8, u8, u8)> {
        if self.format() != SampleFormat::Rgb8 || row >= self.height() || col >= self.width() {
            return None;
        }
        let idx = (row as usize * self.width() as usize + col as usize) * 3;
        let d = self.data();
        Some((d[idx], d[idx + 1], d[idx + 2]))
    }
}

impl RasterMut {
    /// Get the intensity sample at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if self.format() != SampleFormat::Gray8 || row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.data()[row as usize * self.width() as usize + col as usize])
    }

    /// Get the intensity sample at `(row, col)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> u8 {
        self.data()[row as usize * self.width() as usize + col as usize]
    }

    /// Set the intensity sample at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for a coordinate outside the raster
    /// and [`Error::UnsupportedFormat`] for a non-grayscale raster.
    pub fn set(&mut self, row: u32, col: u32, val: u8) -> Result<()> {
        if self.format() != SampleFormat::Gray8 {
            return Err(Error::UnsupportedFormat {
                expected: SampleFormat::Gray8.name(),
                actual: self.format().name(),
            });
        }
        if row >= self.height() || col >= self.width() {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            });
        }
        let idx = row as usize * self.width() as usize + col as usize;
        self.data_mut()[idx] = val;
        Ok(())
    }

    /// Set the intensity sample at `(row, col)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn set_unchecked(&mut self, row: u32, col: u32, val: u8) {
        let idx = row as usize * self.width() as usize + col as usize;
        self.data_mut()[idx] = val;
    }

    /// Get the RGB pixel at `(row, col)`.
    pub fn get_rgb(&self, row: u32, col: u32) -> Option<(u8, u8, u8)> {
        if self.format() != SampleFormat::Rgb8 || row >= self.height() || col >= self.width() {
            return None;
        }
        let idx = (row as usize * self.width() as usize + col as usize) * 3;
        let d = self.data();
        Some((d[idx], d[idx + 1], d[idx + 2]))
    }

    /// Set the RGB pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for a coordinate outside the raster
    /// and [`Error::UnsupportedFormat`] for a non-RGB raster.
    pub fn set_rgb(&mut self, row: u32, col: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.format() != SampleFormat::Rgb8 {
            return Err(Error::UnsupportedFormat {
                expected: SampleFormat::Rgb8.name(),
                actual: self.format().name(),
            });
        }
        if row >= self.height() || col >= self.width() {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            });
        }
        let idx = (row as usize * self.width() as usize + col as usize) * 3;
        let d = self.data_mut();
        d[idx] = r;
        d[idx + 1] = g;
        d[idx + 2] = b;
        Ok(())
    }
}
