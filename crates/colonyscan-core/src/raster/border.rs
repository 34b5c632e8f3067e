//! Border operations
//!
//! Adding a border of background samples around a mask guarantees that
//! every interior pixel's 8-neighborhood stays in bounds during boundary
//! traversal, and that no foreground region touches the outer frame.
//! `remove_border` crops the padding back off, restoring the original
//! rectangle exactly.

use super::{Raster, RasterData};
use crate::error::{Error, Result};
use std::sync::Arc;

impl Raster {
    /// Add a uniform border around the image.
    ///
    /// Creates a new raster with `margin` pixels of border on all sides,
    /// every border sample set to `val`. For RGB rasters all three channel
    /// bytes are set to `val`. A margin of 0 returns a plain copy.
    pub fn add_border(&self, margin: u32, val: u8) -> Raster {
        if margin == 0 {
            return self.deep_clone();
        }

        let samples = self.format().samples();
        let width = self.width() + 2 * margin;
        let height = self.height() + 2 * margin;
        let row_bytes = width as usize * samples;
        let mut data = vec![val; row_bytes * height as usize];

        for row in 0..self.height() {
            let src = self.row(row);
            let start = (row + margin) as usize * row_bytes + margin as usize * samples;
            data[start..start + src.len()].copy_from_slice(src);
        }

        Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                format: self.format(),
                data,
            }),
        }
    }

    /// Remove a uniform border from the image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BorderTooLarge`] if `2 * margin` is not smaller
    /// than both dimensions.
    pub fn remove_border(&self, margin: u32) -> Result<Raster> {
        if margin == 0 {
            return Ok(self.deep_clone());
        }
        if 2 * margin >= self.width() || 2 * margin >= self.height() {
            return Err(Error::BorderTooLarge {
                margin,
                width: self.width(),
                height: self.height(),
            });
        }

        let samples = self.format().samples();
        let width = self.width() - 2 * margin;
        let height = self.height() - 2 * margin;
        let row_bytes = width as usize * samples;
        let mut data = Vec::with_capacity(row_bytes * height as usize);

        for row in 0..height {
            let src = self.row(row + margin);
            let start = margin as usize * samples;
            data.extend_from_slice(&src[start..start + row_bytes]);
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                format: self.format(),
                data,
            }),
        })
    }
}
