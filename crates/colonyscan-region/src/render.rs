//! Overlay rendering
//!
//! Paints the boundary paths of retained regions onto a copy of the
//! original image, leaving every other pixel untouched.

use crate::error::{RegionError, RegionResult};
use crate::trace::Region;
use colonyscan_core::{Raster, SampleFormat};

/// An RGB highlight color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// The default highlight color for traced boundaries.
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };

    /// Create a new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Paint region boundaries onto a copy of an RGB image.
///
/// Every coordinate in every region's path is set to `color`; the rest
/// of the image is copied unchanged. Region coordinates must lie inside
/// the image.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedFormat`] for a non-RGB image, and
/// a core error if a region coordinate falls outside it.
pub fn render_regions(image: &Raster, regions: &[Region], color: Color) -> RegionResult<Raster> {
    if image.format() != SampleFormat::Rgb8 {
        return Err(RegionError::UnsupportedFormat {
            expected: SampleFormat::Rgb8.name(),
            actual: image.format().name(),
        });
    }

    let mut out = image.to_mut();
    for region in regions {
        for p in region.points() {
            out.set_rgb(p.row, p.col, color.r, color.g, color.b)?;
        }
    }

    Ok(out.into())
}
