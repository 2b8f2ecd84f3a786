//! Hexagonal lattice candidate generation.
//!
//! Produces the raw candidate grid for one (rotation, offset)
//! combination. Pure generation: no containment or clearance checks
//! happen here, the packer filters downstream.

use crate::geometry::Point;

/// Center-to-center pitch for circles of `radius` separated by `gap`.
#[inline]
pub fn pitch(radius: f64, gap: f64) -> f64 {
    2.0 * radius + gap
}

/// Vertical spacing between rows of a triangular lattice with the
/// given pitch.
#[inline]
pub fn row_height(pitch: f64) -> f64 {
    pitch * 3.0_f64.sqrt() / 2.0
}

/// One lattice cell: the producing (row, col) indices and the rotated
/// candidate position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell {
    pub row: i64,
    pub col: i64,
    pub point: Point,
}

/// Finite iterator over a staggered hexagonal lattice.
///
/// Cells are generated for row and col in `[-steps, steps]`, where
/// `steps = ceil(diagonal / pitch) + 2`. Sized from the bounding-box
/// diagonal so the grid still covers the box after any rotation. Odd
/// rows shift by half a pitch (standard staggered hex layout); the
/// parity is taken with `rem_euclid` so rows below the origin stagger
/// the same way as rows above it.
///
/// Iteration order is row-major (row, then col, both ascending), which
/// is what makes packing results reproducible.
pub struct HexLattice {
    center: Point,
    pitch: f64,
    row_height: f64,
    cos_a: f64,
    sin_a: f64,
    offset_x: f64,
    offset_y: f64,
    steps: i64,
    row: i64,
    col: i64,
    exhausted: bool,
}

impl HexLattice {
    /// Build a lattice covering a bounding region.
    ///
    /// `center` is the rotation pivot (the polygon's bounding-box
    /// center), `diagonal` the box diagonal, `angle_rad` the lattice
    /// rotation, `offset` a translational phase shift applied before
    /// rotation. `pitch` must be positive - the packer validates that
    /// before constructing one of these.
    pub fn new(
        center: Point,
        diagonal: f64,
        pitch: f64,
        angle_rad: f64,
        offset: (f64, f64),
    ) -> Self {
        let steps = (diagonal / pitch).ceil() as i64 + 2;
        Self {
            center,
            pitch,
            row_height: row_height(pitch),
            cos_a: angle_rad.cos(),
            sin_a: angle_rad.sin(),
            offset_x: offset.0,
            offset_y: offset.1,
            steps,
            row: -steps,
            col: -steps,
            exhausted: false,
        }
    }

    /// Total number of cells this lattice will yield.
    pub fn len(&self) -> usize {
        let side = (2 * self.steps + 1) as usize;
        side * side
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell_at(&self, row: i64, col: i64) -> LatticeCell {
        // Un-rotated position relative to the pivot, odd rows staggered
        let stagger = row.rem_euclid(2) as f64 * (self.pitch / 2.0);
        let lx = col as f64 * self.pitch + stagger + self.offset_x;
        let ly = row as f64 * self.row_height + self.offset_y;

        // Rotate about the pivot
        let point = Point::new(
            self.center.x + lx * self.cos_a - ly * self.sin_a,
            self.center.y + lx * self.sin_a + ly * self.cos_a,
        );

        LatticeCell { row, col, point }
    }
}

impl Iterator for HexLattice {
    type Item = LatticeCell;

    fn next(&mut self) -> Option<LatticeCell> {
        if self.exhausted {
            return None;
        }

        let cell = self.cell_at(self.row, self.col);

        self.col += 1;
        if self.col > self.steps {
            self.col = -self.steps;
            self.row += 1;
            if self.row > self.steps {
                self.exhausted = true;
            }
        }

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let side = 2 * self.steps + 1;
        let done = (self.row + self.steps) * side + (self.col + self.steps);
        let remaining = (side * side - done) as usize;
        (remaining, Some(remaining))
    }
}

// ============================================================================
// TESTS
// ============================================================================
