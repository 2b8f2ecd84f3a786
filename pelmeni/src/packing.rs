//! Circle packing optimizer.
//!
//! Sweeps a discrete grid of lattice rotations and phase offsets,
//! filters candidates through the containment and clearance tests, and
//! keeps the configuration that fits the most circles.
//!
//! This is a best-effort heuristic, not an optimal packer: a single
//! hex lattice aligned arbitrarily to a polygon can leave large
//! uncovered margins near non-axis-aligned edges, and sampling a few
//! rotations and offsets approximates the best alignment at a cost
//! linear in (angles x offsets x lattice cells). Callers wanting a
//! hard latency bound must bound the polygon-size/radius ratio
//! themselves; there is no internal cap.

use crate::containment::{distance_to_edge, point_in_polygon};
use crate::geometry::{Circle, Polygon};
use crate::lattice::{HexLattice, pitch, row_height};

/// Gap between circle surfaces when the caller supplies none.
pub const DEFAULT_SPACING: f64 = 2.0;

/// Search grid configuration for the packing sweep.
///
/// The defaults reproduce the reference grid: angles
/// `{0, 15, 30, 45, 60}` degrees (enough to cover the 60-degree
/// symmetry of a triangular lattice) and `offset_divisions = 2`, i.e.
/// phase offsets `{(0,0), (d/2,0), (0,h/2), (d/2,h/2)}` for pitch `d`
/// and row height `h`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackConfig {
    /// Circle radius, must be positive
    pub radius: f64,
    /// Minimum surface-to-surface gap, must be non-negative
    pub spacing: f64,
    /// Lattice rotations to try, in degrees
    pub angles_deg: Vec<f64>,
    /// Phase offsets per axis: offsets are `(i*d/N, j*h/N)` for
    /// `i, j` in `[0, N)`
    pub offset_divisions: usize,
}

impl PackConfig {
    /// Config with the reference sweep grid.
    pub fn new(radius: f64, spacing: f64) -> Self {
        Self {
            radius,
            spacing,
            angles_deg: vec![0.0, 15.0, 30.0, 45.0, 60.0],
            offset_divisions: 2,
        }
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::new(10.0, DEFAULT_SPACING)
    }
}

/// The winning configuration of one packing run.
///
/// Circles appear in lattice generation order (row, then column) of
/// the winning (angle, offset) combination - not spatially sorted.
/// Immutable after return; two runs with identical inputs produce
/// identical results (the sweep has no randomness).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackingResult {
    pub circles: Vec<Circle>,
    /// Lattice rotation of the winning combination, degrees
    pub angle_deg: f64,
    /// Phase offset of the winning combination
    pub offset: (f64, f64),
}

impl PackingResult {
    /// Number of circles placed.
    #[inline]
    pub fn count(&self) -> usize {
        self.circles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Pack circles of `radius` into `polygon` with the default sweep grid.
///
/// Total function: degenerate input (fewer than 3 vertices,
/// non-positive radius, negative spacing) yields an empty result, and
/// so does a polygon too small to fit even one circle. Never panics,
/// never errors.
pub fn pack_circles(polygon: &Polygon, radius: f64, spacing: f64) -> PackingResult {
    pack_circles_with(polygon, &PackConfig::new(radius, spacing))
}

/// Pack circles with an explicit search grid.
pub fn pack_circles_with(polygon: &Polygon, config: &PackConfig) -> PackingResult {
    // Reject degenerate input before any lattice work (a zero or
    // negative pitch would make enumeration meaningless)
    if polygon.outline.len() < 3
        || config.radius <= 0.0
        || config.spacing < 0.0
        || config.angles_deg.is_empty()
        || config.offset_divisions == 0
    {
        return PackingResult::default();
    }

    // bounding_box is Some: outline has >= 3 vertices
    let Some((min_x, min_y, max_x, max_y)) = polygon.bounding_box() else {
        return PackingResult::default();
    };
    let Some(center) = polygon.center() else {
        return PackingResult::default();
    };
    let Some(diagonal) = polygon.diagonal() else {
        return PackingResult::default();
    };

    let r = config.radius;
    let d = pitch(r, config.spacing);
    let h = row_height(d);
    let divisions = config.offset_divisions as f64;

    let mut best = PackingResult::default();

    for &angle in &config.angles_deg {
        let rad = angle.to_radians();

        for oj in 0..config.offset_divisions {
            for oi in 0..config.offset_divisions {
                let offset = (oi as f64 * d / divisions, oj as f64 * h / divisions);

                let mut circles = Vec::new();
                for cell in HexLattice::new(center, diagonal, d, rad, offset) {
                    let p = cell.point;

                    // Coarse filter: bounding box expanded by the
                    // radius. No semantic effect, the strict checks
                    // below decide, this just skips far-flung cells.
                    if p.x < min_x - r || p.x > max_x + r || p.y < min_y - r || p.y > max_y + r {
                        continue;
                    }

                    if !point_in_polygon(p.x, p.y, &polygon.outline) {
                        continue;
                    }
                    if distance_to_edge(p, &polygon.outline) < r {
                        continue;
                    }

                    circles.push(Circle::new(
                        p,
                        r,
                        format!("a{}_r{}_c{}", angle, cell.row, cell.col),
                    ));
                }

                // Strictly-greater keeps the first-found combination on
                // ties, which pins down the result order
                if circles.len() > best.circles.len() {
                    best = PackingResult {
                        circles,
                        angle_deg: angle,
                        offset,
                    };
                }
            }
        }
    }

    best
}

// ============================================================================
// TESTS
// ============================================================================
