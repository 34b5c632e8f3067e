use anyhow::{Context, Result};
use clap::Parser;
use colonyscan_io::{read_image, write_image};
use colonyscan_region::{Color, find_blobs, render_regions};
use colonyscan_threshold::binarize;
use std::path::PathBuf;

/// Find closed boundary blobs in a micrograph and highlight them
#[derive(Parser, Debug)]
#[command(name = "colonyscan")]
#[command(about = "Trace blob boundaries within a perimeter range", long_about = None)]
struct Args {
    /// Input image file (png, pnm, pgm, ppm)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output overlay image file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Minimum traced perimeter, inclusive
    #[arg(value_name = "LOWER")]
    lower: usize,

    /// Maximum traced perimeter, inclusive
    #[arg(value_name = "UPPER")]
    upper: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let image = read_image(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let gray = image.to_luminance()?;

    let (mask, threshold) = binarize(&gray)?;
    println!("threshold: {}", threshold);

    let regions = find_blobs(&mask, args.lower, args.upper)?;
    println!(
        "{} region(s) with perimeter in {}..={}",
        regions.len(),
        args.lower,
        args.upper
    );

    let overlay = render_regions(&image.to_rgb()?, &regions, Color::RED)?;
    write_image(&overlay, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
