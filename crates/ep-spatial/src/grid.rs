//! Partition of the world into quarantine cells.
//!
//! # Layout
//!
//! The world `[0, width) × [0, height)` is tiled by square cells of side
//! `unit`, numbered row-major:
//!
//! ```text
//! cell = row * columns + column
//! ```
//!
//! Remainders that do not tile evenly are left uncovered, so the grid holds
//! `floor(width / unit) × floor(height / unit)` cells.  An axis shorter than
//! `unit` gets a single cell spanning the whole axis instead of none, and a
//! non-positive or non-finite `unit` does the same for both axes, so every
//! grid has at least one cell.
//!
//! A grid never holds more than [`MAX_CELLS`] cells.  When `unit` would tile
//! the world more finely, it is doubled until the grid fits.

use ep_core::{CellId, Point, Rect, SimRng};

/// Upper bound on the number of cells in one grid.
pub const MAX_CELLS: u64 = 1 << 20;

/// One grid cell plus the number of agents allocated into it.
///
/// Occupancy is bookkeeping only; nothing caps how many agents share a cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuarantineBox {
    pub bounds: Rect,
    occupancy:  u32,
}

impl QuarantineBox {
    fn new(bounds: Rect) -> Self {
        Self { bounds, occupancy: 0 }
    }

    #[inline]
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }
}

/// Result of [`QuarantineGrid::allocate`]: a cell and a starting point
/// strictly inside it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Allocation {
    pub cell:   CellId,
    pub bounds: Rect,
    pub point:  Point,
}

/// A fixed grid of quarantine cells over the world rectangle.
#[derive(Clone, Debug)]
pub struct QuarantineGrid {
    columns: u32,
    rows:    u32,
    boxes:   Vec<QuarantineBox>,
}

impl QuarantineGrid {
    /// Lay a grid of `unit`-sized cells over a `width × height` world.
    ///
    /// World dimensions are expected to be positive (see
    /// `WorldConfig::validate`); a degenerate world yields one empty cell.
    pub fn new(width: f64, height: f64, unit: f64) -> Self {
        let width = finite_len(width);
        let height = finite_len(height);

        let mut unit = unit;
        while Self::cell_count(width, height, unit) > MAX_CELLS {
            unit *= 2.0;
        }
        let (columns, cell_w) = axis_cells(width, unit);
        let (rows, cell_h) = axis_cells(height, unit);

        let mut boxes = Vec::with_capacity(columns as usize * rows as usize);
        for row in 0..rows {
            for col in 0..columns {
                let start = Point::new(col as f64 * cell_w, row as f64 * cell_h);
                let end = start.translate(cell_w, cell_h);
                boxes.push(QuarantineBox::new(Rect::new(start, end)));
            }
        }

        Self { columns, rows, boxes }
    }

    /// Cells a `width × height` world tiled by `unit` would hold, before the
    /// [`MAX_CELLS`] cap.  Saturates at `u64::MAX`.
    pub fn cell_count(width: f64, height: f64, unit: f64) -> u64 {
        let columns = axis_count(finite_len(width), unit);
        let rows = axis_count(finite_len(height), unit);
        columns.saturating_mul(rows)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of cells.  Always at least one.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, cell: CellId) -> Option<&QuarantineBox> {
        self.boxes.get(cell.index())
    }

    pub fn boxes(&self) -> &[QuarantineBox] {
        &self.boxes
    }

    /// Pick a uniformly random cell and a uniformly random integer point
    /// strictly inside it.
    ///
    /// Successive calls are independent: two agents may land in the same
    /// cell, even at the same point.
    pub fn allocate(&mut self, rng: &mut SimRng) -> Allocation {
        let idx = rng.gen_range(0..self.boxes.len());
        let qbox = &mut self.boxes[idx];
        qbox.occupancy += 1;

        let bounds = qbox.bounds;
        let point = Point::new(
            interior_coord(bounds.start.x, bounds.end.x, rng),
            interior_coord(bounds.start.y, bounds.end.y, rng),
        );

        Allocation { cell: CellId(idx as u32), bounds, point }
    }
}

/// Non-negative finite length; anything else collapses to zero.
fn finite_len(len: f64) -> f64 {
    if len.is_finite() { len.max(0.0) } else { 0.0 }
}

/// Number of cells along one axis, at least one.
fn axis_count(len: f64, unit: f64) -> u64 {
    if !(unit.is_finite() && unit > 0.0) {
        return 1;
    }
    let count = (len / unit).floor();
    if count.is_nan() || count < 1.0 {
        1
    } else {
        // `as` saturates for floats beyond u64::MAX.
        count as u64
    }
}

/// Cell count and cell size along one axis.  Called only once the grid fits
/// under `MAX_CELLS`, so the count fits in a `u32`.
fn axis_cells(len: f64, unit: f64) -> (u32, f64) {
    if !(unit.is_finite() && unit > 0.0) || len < unit {
        (1, len)
    } else {
        (axis_count(len, unit) as u32, unit)
    }
}
