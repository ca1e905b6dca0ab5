//! Brush engine for square pixel stamps
//!
//! This module turns a pointer anchor cell and a brush size into the set of
//! grid cells to write. The footprint computation is pure; [`BrushEngine`]
//! adds per-stroke state so that a slow drag over the same cell does not
//! stamp it again.

use tracing::debug;

use crate::types::BrushSize;

/// Compute the cells covered by a square brush anchored at `center`.
///
/// The square starts `floor(size / 2)` cells up and left of the anchor, so
/// sizes 1 and 3 are centered and size 2 puts the anchor in the square's
/// lower-right cell.
/// Cells outside `[0, bounds)` are dropped. Cells come back in row-major order.
pub fn compute_affected_cells(center: (i32, i32), size: BrushSize, bounds: u32) -> Vec<(u32, u32)> {
    let size = i32::from(size.get());
    let offset = size / 2;
    let bounds = i64::from(bounds);
    let mut cells = Vec::with_capacity((size * size) as usize);

    for dy in 0..size {
        for dx in 0..size {
            let x = i64::from(center.0) - i64::from(offset) + i64::from(dx);
            let y = i64::from(center.1) - i64::from(offset) + i64::from(dy);
            if (0..bounds).contains(&x) && (0..bounds).contains(&y) {
                cells.push((x as u32, y as u32));
            }
        }
    }

    cells
}

/// Brush engine that generates stamps from pointer input
///
/// Tracks the last anchor cell of the current stroke. Repeated input at the
/// same anchor produces no cells until the pointer moves to another cell.
#[derive(Debug, Clone)]
pub struct BrushEngine {
    /// Grid side length used for clipping
    bounds: u32,
    /// Last anchor cell (None if stroke not started or nothing stamped yet)
    last_anchor: Option<(i32, i32)>,
    /// Whether a stroke is in progress
    active: bool,
}

impl BrushEngine {
    /// Create a brush engine clipping to a `bounds` x `bounds` grid
    pub fn new(bounds: u32) -> Self {
        Self {
            bounds,
            last_anchor: None,
            active: false,
        }
    }

    pub fn bounds(&self) -> u32 {
        self.bounds
    }

    /// Start a new stroke
    pub fn begin_stroke(&mut self) {
        self.active = true;
        self.last_anchor = None;
    }

    /// Check if a stroke is in progress
    pub fn is_stroking(&self) -> bool {
        self.active
    }

    /// Stamp at an anchor cell
    ///
    /// Returns the cells to write, or an empty list if no stroke is active,
    /// the anchor lies outside the grid, or it equals the previous anchor.
    pub fn stroke_to(&mut self, anchor: (i32, i32), size: BrushSize) -> Vec<(u32, u32)> {
        if !self.active {
            return Vec::new();
        }

        let bounds = self.bounds as i64;
        let inside = (0..bounds).contains(&i64::from(anchor.0))
            && (0..bounds).contains(&i64::from(anchor.1));
        if !inside {
            return Vec::new();
        }

        if self.last_anchor == Some(anchor) {
            return Vec::new();
        }
        self.last_anchor = Some(anchor);

        let cells = compute_affected_cells(anchor, size, self.bounds);
        debug!(
            "BrushEngine::stroke_to: anchor=({}, {}), size={}, {} cells",
            anchor.0,
            anchor.1,
            size.get(),
            cells.len()
        );
        cells
    }

    /// End the current stroke
    pub fn end_stroke(&mut self) {
        self.active = false;
        self.last_anchor = None;
    }
}
