//! PNM image format support
//!
//! Reads and writes the binary netpbm formats: P5 (grayscale) and P6
//! (RGB). ASCII variants and maxval other than 255 are rejected.

use crate::{IoError, IoResult};
use colonyscan_core::{Raster, SampleFormat};
use std::io::{BufRead, Write};

fn skip_space_and_comments(bytes: &[u8], pos: &mut usize) {
    while *pos < bytes.len() {
        match bytes[*pos] {
            b' ' | b'\t' | b'\r' | b'\n' => *pos += 1,
            b'#' => {
                while *pos < bytes.len() && bytes[*pos] != b'\n' {
                    *pos += 1;
                }
            }
            _ => break,
        }
    }
}

fn next_token<'a>(bytes: &'a [u8], pos: &mut usize) -> IoResult<&'a [u8]> {
    skip_space_and_comments(bytes, pos);
    let start = *pos;
    while *pos < bytes.len() && !bytes[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    if start == *pos {
        return Err(IoError::DecodeError(
            "unexpected end of PNM header".to_string(),
        ));
    }
    Ok(&bytes[start..*pos])
}

fn parse_header_value(token: &[u8]) -> IoResult<u32> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            IoError::DecodeError(format!(
                "invalid PNM header value: {}",
                String::from_utf8_lossy(token)
            ))
        })
}

/// Read a binary PNM (P5 or P6) image
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut pos = 0usize;
    let magic = next_token(&bytes, &mut pos)?;
    let format = match magic {
        b"P5" => SampleFormat::Gray8,
        b"P6" => SampleFormat::Rgb8,
        b"P1" | b"P2" | b"P3" => {
            return Err(IoError::UnsupportedFormat(
                "ASCII PNM variants are not supported".to_string(),
            ));
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "not a PNM file (magic {})",
                String::from_utf8_lossy(other)
            )));
        }
    };

    let width = parse_header_value(next_token(&bytes, &mut pos)?)?;
    let height = parse_header_value(next_token(&bytes, &mut pos)?)?;
    let maxval = parse_header_value(next_token(&bytes, &mut pos)?)?;
    if maxval != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {}",
            maxval
        )));
    }

    // Exactly one whitespace byte separates the header from the samples.
    pos += 1;

    let expected = width as usize * height as usize * format.samples();
    if bytes.len() < pos + expected {
        return Err(IoError::DecodeError(format!(
            "PNM sample data truncated: {} bytes, expected {}",
            bytes.len().saturating_sub(pos),
            expected
        )));
    }

    let data = bytes[pos..pos + expected].to_vec();
    Ok(Raster::from_raw(width, height, format, data)?)
}

/// Write a binary PNM image: P5 for grayscale, P6 for RGB
pub fn write_pnm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    let magic = match raster.format() {
        SampleFormat::Gray8 => "P5",
        SampleFormat::Rgb8 => "P6",
    };
    write!(
        writer,
        "{}\n{} {}\n255\n",
        magic,
        raster.width(),
        raster.height()
    )?;
    writer.write_all(raster.data())?;
    Ok(())
}
