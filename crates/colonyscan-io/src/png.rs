//! PNG image format support

use crate::{IoError, IoResult};
use colonyscan_core::{Raster, SampleFormat};
use ::png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// 8-bit grayscale maps to `Gray8` and 8-bit RGB to `Rgb8`. Alpha
/// channels are dropped; 16-bit samples keep their high byte. Indexed
/// images and 1/2/4-bit depths are not supported.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if !matches!(bit_depth, BitDepth::Eight | BitDepth::Sixteen) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }

    // Input samples per pixel and output format
    let (in_samples, format) = match color_type {
        ColorType::Grayscale => (1, SampleFormat::Gray8),
        ColorType::GrayscaleAlpha => (2, SampleFormat::Gray8),
        ColorType::Rgb => (3, SampleFormat::Rgb8),
        ColorType::Rgba => (4, SampleFormat::Rgb8),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG images are not supported".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    // Stride between samples of one pixel: 16-bit input keeps only the
    // high byte of each sample.
    let byte_stride = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
    let out_samples = format.samples();

    let mut samples = Vec::with_capacity(width as usize * height as usize * out_samples);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            let px = x * in_samples * byte_stride;
            for s in 0..out_samples {
                samples.push(row[px + s * byte_stride]);
            }
        }
    }

    Ok(Raster::from_raw(width, height, format, samples)?)
}

/// Write a PNG image
///
/// `Gray8` rasters become 8-bit grayscale PNGs, `Rgb8` rasters 8-bit
/// RGB.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let color_type = match raster.format() {
        SampleFormat::Gray8 => ColorType::Grayscale,
        SampleFormat::Rgb8 => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // Raster rows are already contiguous interleaved bytes.
    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
