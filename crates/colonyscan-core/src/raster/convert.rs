//! Sample format conversion
//!
//! Conversions between grayscale and RGB rasters. The pipeline consumes
//! grayscale input; the overlay renderer needs an RGB base image.

use super::{Raster, RasterData, SampleFormat};
use crate::error::Result;
use std::sync::Arc;

/// Perceptual luminance weights
const RED_WEIGHT: f32 = 0.3;
const GREEN_WEIGHT: f32 = 0.5;
const BLUE_WEIGHT: f32 = 0.2;

impl Raster {
    /// Convert to a single-channel luminance raster.
    ///
    /// RGB input is reduced with the weights 0.3 R + 0.5 G + 0.2 B,
    /// rounded to the nearest integer. Grayscale input is returned as a
    /// cheap shared clone.
    pub fn to_luminance(&self) -> Result<Raster> {
        match self.format() {
            SampleFormat::Gray8 => Ok(self.clone()),
            SampleFormat::Rgb8 => {
                let mut data = Vec::with_capacity(self.width() as usize * self.height() as usize);
                for px in self.data().chunks_exact(3) {
                    let lum = RED_WEIGHT * px[0] as f32
                        + GREEN_WEIGHT * px[1] as f32
                        + BLUE_WEIGHT * px[2] as f32
                        + 0.5;
                    data.push((lum as u32).min(255) as u8);
                }
                Ok(Raster {
                    inner: Arc::new(RasterData {
                        width: self.width(),
                        height: self.height(),
                        format: SampleFormat::Gray8,
                        data,
                    }),
                })
            }
        }
    }

    /// Convert to an RGB raster.
    ///
    /// Grayscale samples are replicated into all three channels. RGB
    /// input is returned as a cheap shared clone.
    pub fn to_rgb(&self) -> Result<Raster> {
        match self.format() {
            SampleFormat::Rgb8 => Ok(self.clone()),
            SampleFormat::Gray8 => {
                let mut data =
                    Vec::with_capacity(self.width() as usize * self.height() as usize * 3);
                for &sample in self.data() {
                    data.extend_from_slice(&[sample, sample, sample]);
                }
                Ok(Raster {
                    inner: Arc::new(RasterData {
                        width: self.width(),
                        height: self.height(),
                        format: SampleFormat::Rgb8,
                        data,
                    }),
                })
            }
        }
    }
}
