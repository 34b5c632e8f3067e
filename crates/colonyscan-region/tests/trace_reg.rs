//! Region tracer regression test
//!
//! Exercises the Moore-neighbor walker on shapes that stress the
//! rotating search order: convex blocks, concave corners, diagonal
//! connectivity, and the single-pixel degenerate case.
//!
//! Run with:
//! ```
//! cargo test -p colonyscan-region --test trace_reg
//! ```

use colonyscan_core::{FOREGROUND, Raster, RasterMut, SampleFormat};
use colonyscan_region::{TracePoint, trace_region};
use colonyscan_test::RegParams;
use std::collections::HashSet;

fn padded_mask(width: u32, height: u32, foreground: &[(u32, u32)]) -> RasterMut {
    let mut m = Raster::new(width, height, SampleFormat::Gray8)
        .unwrap()
        .to_mut();
    for &(row, col) in foreground {
        m.set(row + 1, col + 1, FOREGROUND).unwrap();
    }
    m
}

fn assert_closed_8_connected(points: &[TracePoint]) {
    for pair in points.windows(2) {
        assert!(
            pair[0].adjacent(pair[1]),
            "consecutive points {:?} and {:?} not 8-connected",
            pair[0],
            pair[1]
        );
    }
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        assert!(first.adjacent(last), "path endpoints not 8-connected");
    }
}

#[test]
fn trace_reg() {
    let mut rp = RegParams::new("trace");

    // -----------------------------------------------------------
    // Single isolated pixel: the walk terminates immediately
    // -----------------------------------------------------------
    let mut mask = padded_mask(7, 7, &[(2, 2)]);
    let region = trace_region(&mut mask, 3, 3, 1).unwrap();
    rp.compare_values(1.0, region.len() as f64, 0.0);
    assert_eq!(region.points(), &[TracePoint::new(2, 2)]);

    // -----------------------------------------------------------
    // Solid 3x3 square: all 8 perimeter pixels, center untouched
    // -----------------------------------------------------------
    let square: Vec<(u32, u32)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
    let mut mask = padded_mask(5, 5, &square);
    let region = trace_region(&mut mask, 1, 1, 1).unwrap();
    rp.compare_values(8.0, region.len() as f64, 0.0);
    assert!(!region.points().contains(&TracePoint::new(1, 1)));
    assert_closed_8_connected(region.points());

    // -----------------------------------------------------------
    // Plus sign: the walker steps diagonally from arm tip to arm
    // tip, cutting across the concave corners, so the center pixel
    // is never part of the path
    // -----------------------------------------------------------
    let plus = [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)];
    let mut mask = padded_mask(5, 5, &plus);
    let region = trace_region(&mut mask, 1, 2, 1).unwrap();
    rp.compare_values(4.0, region.len() as f64, 0.0);
    let unique: HashSet<_> = region.points().iter().collect();
    rp.compare_values(4.0, unique.len() as f64, 0.0);
    assert!(!region.points().contains(&TracePoint::new(1, 1)));
    assert_closed_8_connected(region.points());

    // -----------------------------------------------------------
    // Diagonal pair: 8-connectivity joins them into one region
    // -----------------------------------------------------------
    let mut mask = padded_mask(6, 6, &[(1, 1), (2, 2)]);
    let region = trace_region(&mut mask, 2, 2, 1).unwrap();
    rp.compare_values(2.0, region.len() as f64, 0.0);
    assert_closed_8_connected(region.points());

    // -----------------------------------------------------------
    // One-pixel-wide filament: walked out and back, each pixel
    // recorded once
    // -----------------------------------------------------------
    let filament: Vec<(u32, u32)> = (0..5).map(|c| (1, c)).collect();
    let mut mask = padded_mask(8, 4, &filament);
    let region = trace_region(&mut mask, 2, 1, 1).unwrap();
    rp.compare_values(5.0, region.len() as f64, 0.0);
    assert_closed_8_connected(region.points());

    assert!(rp.cleanup(), "trace regression test failed");
}
