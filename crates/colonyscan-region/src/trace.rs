//! Boundary tracing for connected foreground regions
//!
//! Implements Moore-neighbor boundary following: from a seed pixel the
//! walker scans the 8-connected neighborhood in clockwise order, always
//! resuming the scan 90 degrees counter-clockwise of the direction it
//! just arrived from, which keeps it hugging the region's outer edge.
//! Visited boundary pixels are marked in place with a third sample value
//! so a region is traced at most once.

use crate::error::{RegionError, RegionResult};
use colonyscan_core::{BACKGROUND, FOREGROUND, RasterMut, SampleFormat};

/// Sample value marking a pixel already incorporated into a traced region.
///
/// Distinct from both [`BACKGROUND`] and [`FOREGROUND`]; once written it
/// is never converted back.
pub const VISITED: u8 = 128;

/// Row offset of each neighbor, clockwise starting from north-west
const ROW_OFF: [i32; 8] = [-1, -1, -1, 0, 1, 1, 1, 0];

/// Column offset of each neighbor, clockwise starting from north-west
const COL_OFF: [i32; 8] = [-1, 0, 1, 1, 1, 0, -1, -1];

/// Search phase to resume from, indexed by the offset just taken.
///
/// Maps each arrival direction to the neighbor index 90 degrees
/// counter-clockwise of it, so the next scan starts outside the region.
const RESTART: [usize; 8] = [6, 0, 0, 2, 2, 4, 4, 6];

/// A point on a traced boundary, in un-padded image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TracePoint {
    /// Row index
    pub row: u32,
    /// Column index
    pub col: u32,
}

impl TracePoint {
    /// Create a new trace point
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Check whether another point is identical or an 8-connected neighbor
    pub fn adjacent(self, other: TracePoint) -> bool {
        let dr = (self.row as i64 - other.row as i64).abs();
        let dc = (self.col as i64 - other.col as i64).abs();
        dr <= 1 && dc <= 1
    }
}

impl From<(u32, u32)> for TracePoint {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

/// A traced region (blob)
///
/// Holds the ordered outer-boundary path of one connected foreground
/// region, in the coordinate space of the un-padded image. The traced
/// perimeter is the number of path points; it counts boundary steps, not
/// interior area, and is the value the blob scanner filters on.
#[derive(Debug, Clone, Default)]
pub struct Region {
    points: Vec<TracePoint>,
}

impl Region {
    /// Create a region from an already-traced path
    pub fn new(points: Vec<TracePoint>) -> Self {
        Self { points }
    }

    /// Get the traced perimeter (number of boundary points)
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the region has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the boundary path in traversal order
    #[inline]
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// Get the bounding rectangle as `(top_left, bottom_right)`, both
    /// inclusive. Returns `None` for an empty region.
    pub fn bounds(&self) -> Option<(TracePoint, TracePoint)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_row = u32::MAX;
        let mut min_col = u32::MAX;
        let mut max_row = 0;
        let mut max_col = 0;

        for p in &self.points {
            min_row = min_row.min(p.row);
            min_col = min_col.min(p.col);
            max_row = max_row.max(p.row);
            max_col = max_col.max(p.col);
        }

        Some((
            TracePoint::new(min_row, min_col),
            TracePoint::new(max_row, max_col),
        ))
    }
}

/// Sample the mask, treating anything outside it as background.
#[inline]
fn sample(mask: &RasterMut, row: i32, col: i32) -> u8 {
    if row < 0 || col < 0 {
        return BACKGROUND;
    }
    mask.get(row as u32, col as u32).unwrap_or(BACKGROUND)
}

/// Trace the outer boundary of the region containing the seed pixel.
///
/// The seed must be [`FOREGROUND`]. Every boundary pixel reached is
/// marked [`VISITED`] in place; pixels that were still foreground when
/// reached are appended to the path, converted to un-padded coordinates
/// by subtracting `margin` from both axes. The walk ends when the cursor
/// returns to the seed; an isolated single pixel yields a path of length
/// one immediately.
///
/// `margin` must be the padding that was applied to `mask`, so that no
/// foreground pixel touches the outer frame.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed pixel is not
/// foreground, and [`RegionError::UnsupportedFormat`] for a non-gray
/// mask. The blob scanner's flag discipline guarantees neither occurs
/// in the pipeline.
pub fn trace_region(
    mask: &mut RasterMut,
    seed_row: u32,
    seed_col: u32,
    margin: u32,
) -> RegionResult<Region> {
    if mask.format() != SampleFormat::Gray8 {
        return Err(RegionError::UnsupportedFormat {
            expected: SampleFormat::Gray8.name(),
            actual: mask.format().name(),
        });
    }
    if mask.get(seed_row, seed_col) != Some(FOREGROUND) {
        return Err(RegionError::InvalidSeed {
            row: seed_row,
            col: seed_col,
        });
    }

    let unpad = |row: i32, col: i32| {
        TracePoint::new((row - margin as i32) as u32, (col - margin as i32) as u32)
    };

    let seed = (seed_row as i32, seed_col as i32);
    let (mut row, mut col) = seed;
    let mut phase = 0usize;

    mask.set_unchecked(seed_row, seed_col, VISITED);
    let mut points = vec![unpad(row, col)];

    loop {
        // First non-background neighbor in clockwise order, starting at
        // the current phase, becomes the new cursor.
        for _ in 0..8 {
            let next_row = row + ROW_OFF[phase];
            let next_col = col + COL_OFF[phase];
            let val = sample(mask, next_row, next_col);
            if val != BACKGROUND {
                row = next_row;
                col = next_col;
                // Already-visited pixels move the cursor without
                // duplicating a path entry.
                if val == FOREGROUND {
                    points.push(unpad(row, col));
                }
                mask.set_unchecked(row as u32, col as u32, VISITED);
                phase = RESTART[phase];
                break;
            }
            phase = (phase + 1) % 8;
        }

        if (row, col) == seed {
            break;
        }
    }

    Ok(Region::new(points))
}
