//! colonyscan-io - Image file I/O for colonyscan
//!
//! Reads and writes rasters from/to image containers:
//!
//! - **PNG** - 8-bit grayscale and RGB (alpha dropped, 16-bit reduced)
//! - **PNM** - binary P5/P6
//!
//! [`read_image`] and [`write_image`] dispatch on the file extension;
//! the format modules are also usable directly with any reader/writer.

mod error;
mod png;
mod pnm;

pub use error::{IoError, IoResult};
pub use pnm::{read_pnm, write_pnm};
pub use self::png::{read_png, write_png};

use colonyscan_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG format
    Png,
    /// Binary netpbm (P5/P6)
    Pnm,
}

impl ImageFormat {
    /// Determine the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] for a missing or unknown
    /// extension.
    pub fn from_path(path: &Path) -> IoResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "pnm" | "pgm" | "ppm" => Ok(ImageFormat::Pnm),
            _ => Err(IoError::UnsupportedFormat(format!(
                "unknown image extension: {}",
                path.display()
            ))),
        }
    }
}

/// Read an image from a file path, dispatching on its extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        ImageFormat::Png => read_png(reader),
        ImageFormat::Pnm => read_pnm(reader),
    }
}

/// Write an image to a file path, dispatching on its extension.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let writer = BufWriter::new(File::create(path)?);
    match format {
        ImageFormat::Png => write_png(raster, writer),
        ImageFormat::Pnm => write_pnm(raster, writer),
    }
}
