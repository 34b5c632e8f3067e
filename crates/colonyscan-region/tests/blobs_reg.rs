//! Blob scanner regression test
//!
//! End-to-end scan scenarios: seeding, perimeter-range filtering, and
//! the guarantee that no boundary pixel is consumed twice.
//!
//! Run with:
//! ```
//! cargo test -p colonyscan-region --test blobs_reg
//! ```

use colonyscan_core::{FOREGROUND, Raster, SampleFormat};
use colonyscan_region::{TracePoint, find_blobs, find_contours};
use colonyscan_test::RegParams;
use std::collections::HashSet;

fn binary_mask(width: u32, height: u32, foreground: &[(u32, u32)]) -> Raster {
    let mut m = Raster::new(width, height, SampleFormat::Gray8)
        .unwrap()
        .to_mut();
    for &(row, col) in foreground {
        m.set(row, col, FOREGROUND).unwrap();
    }
    m.into()
}

fn solid_rect(rows: std::ops::Range<u32>, cols: std::ops::Range<u32>) -> Vec<(u32, u32)> {
    rows.flat_map(|r| cols.clone().map(move |c| (r, c))).collect()
}

#[test]
fn blobs_reg() {
    let mut rp = RegParams::new("blobs");

    // -----------------------------------------------------------
    // 5x5 background except a single foreground pixel at (2, 2)
    // -----------------------------------------------------------
    let mask = binary_mask(5, 5, &[(2, 2)]);
    let regions = find_blobs(&mask, 0, usize::MAX).unwrap();
    rp.compare_values(1.0, regions.len() as f64, 0.0);
    rp.compare_values(1.0, regions[0].len() as f64, 0.0);
    assert_eq!(regions[0].points(), &[TracePoint::new(2, 2)]);

    // -----------------------------------------------------------
    // Perimeter-range filter: a rectangle of traced length 50 and
    // one of length 150; bounds [100, 200] keep only the second
    // -----------------------------------------------------------
    // A solid w x h rectangle traces 2w + 2h - 4 boundary pixels.
    let mut fg = solid_rect(2..15, 2..16); // 13 x 14 -> 50
    fg.extend(solid_rect(30..67, 30..70)); // 37 x 40 -> 150
    let mask = binary_mask(100, 100, &fg);

    let regions = find_blobs(&mask, 0, usize::MAX).unwrap();
    rp.compare_values(2.0, regions.len() as f64, 0.0);
    rp.compare_values(50.0, regions[0].len() as f64, 0.0);
    rp.compare_values(150.0, regions[1].len() as f64, 0.0);

    let filtered = find_blobs(&mask, 100, 200).unwrap();
    rp.compare_values(1.0, filtered.len() as f64, 0.0);
    rp.compare_values(150.0, filtered[0].len() as f64, 0.0);

    // -----------------------------------------------------------
    // Disjoint regions never share a boundary pixel
    // -----------------------------------------------------------
    let mut seen = HashSet::new();
    for region in &regions {
        for p in region.points() {
            assert!(seen.insert(*p), "{:?} consumed twice", p);
        }
    }

    // -----------------------------------------------------------
    // Full pipeline from grayscale: bright squares on a dark field,
    // speckle and oversize regions rejected by the bounds
    // -----------------------------------------------------------
    let mut m = Raster::new(60, 60, SampleFormat::Gray8).unwrap().to_mut();
    m.fill(25);
    for &(row, col) in &solid_rect(5..10, 5..10) {
        m.set(row, col, 230).unwrap(); // 5x5, perimeter 16
    }
    for &(row, col) in &solid_rect(20..24, 30..34) {
        m.set(row, col, 210).unwrap(); // 4x4, perimeter 12
    }
    m.set(40, 40, 240).unwrap(); // speckle, perimeter 1
    for &(row, col) in &solid_rect(45..58, 5..55) {
        m.set(row, col, 220).unwrap(); // 13x50, perimeter 122
    }
    let gray: Raster = m.into();

    let regions = find_contours(&gray, 10, 20).unwrap();
    rp.compare_values(2.0, regions.len() as f64, 0.0);
    rp.compare_values(16.0, regions[0].len() as f64, 0.0);
    rp.compare_values(12.0, regions[1].len() as f64, 0.0);

    let none = find_contours(&gray, 500, 600).unwrap();
    rp.compare_values(0.0, none.len() as f64, 0.0);

    assert!(rp.cleanup(), "blobs regression test failed");
}
