//! Core geometry types for pelmeni.
//!
//! Everything here is plain value types: points, polygons extracted
//! from an SVG outline, and circles produced by the packer. No shared
//! state, no interior mutability.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A simple (non-self-intersecting) polygon outline.
///
/// Vertices are implicitly closed: the last vertex connects back to
/// the first. Simplicity is assumed, not validated - a self-crossing
/// outline produces meaningless (but non-crashing) area and
/// containment results.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Outline vertices in either winding order
    pub outline: Vec<Point>,
    /// Optional ID from the SVG element
    pub id: Option<String>,
    /// Optional per-shape radius from data-radius attribute
    pub data_radius: Option<f64>,
    /// Optional per-shape gap from data-spacing attribute
    pub data_spacing: Option<f64>,
}

/// A placed circle: one pelmeni on the sheet.
///
/// All circles in one packing share the run's radius. The `id` encodes
/// the lattice cell (angle, row, col) that produced the circle and is
/// unique within one packing; it is not stable across runs with
/// different search grids.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub id: String,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Circle {
    pub fn new(center: Point, radius: f64, id: String) -> Self {
        Self { center, radius, id }
    }

    /// Area of this circle.
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Polygon {
    /// Create a polygon from outline vertices.
    pub fn new(outline: Vec<Point>) -> Self {
        Self {
            outline,
            id: None,
            data_radius: None,
            data_spacing: None,
        }
    }

    /// Create a polygon with an ID.
    pub fn with_id(outline: Vec<Point>, id: Option<String>) -> Self {
        Self {
            outline,
            id,
            data_radius: None,
            data_spacing: None,
        }
    }

    /// Get the bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// Returns `None` for an empty outline - there is no box to report
    /// and the fold below would produce infinities.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        if self.outline.is_empty() {
            return None;
        }

        let min_x = self.outline.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = self.outline.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = self.outline.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = self.outline.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some((min_x, min_y, max_x, max_y))
    }

    /// Get the center point of the polygon's bounding box.
    #[inline]
    pub fn center(&self) -> Option<Point> {
        self.bounding_box().map(|(min_x, min_y, max_x, max_y)| {
            Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
        })
    }

    /// Get the diagonal length of the bounding box.
    #[inline]
    pub fn diagonal(&self) -> Option<f64> {
        self.bounding_box().map(|(min_x, min_y, max_x, max_y)| {
            let width = max_x - min_x;
            let height = max_y - min_y;
            (width * width + height * height).sqrt()
        })
    }

    /// Calculate signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area_of_points(&self.outline)
    }

    /// Absolute polygon area, independent of winding direction.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Check if the outline has clockwise winding.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }
}

/// Calculate signed area of a point sequence using the shoelace formula.
///
/// Returns 0.0 for fewer than 3 points (no enclosed area).
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn polygon_bbox() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(0.0, 5.0),
        ]);
        assert_eq!(poly.bounding_box(), Some((0.0, 0.0, 10.0, 5.0)));
    }

    #[test]
    fn empty_polygon_bbox() {
        let poly = Polygon::new(vec![]);
        assert_eq!(poly.bounding_box(), None);
    }

    #[test]
    fn polygon_center() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        let center = poly.center().unwrap();
        assert_eq!(center.x, 5.0);
        assert_eq!(center.y, 5.0);
    }

    #[test]
    fn polygon_diagonal() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 4.0),
        ]);
        assert_eq!(poly.diagonal().unwrap(), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn signed_area_ccw_positive() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        let area = poly.signed_area();
        assert!(area > 0.0, "CCW polygon should have positive signed area, got {}", area);
        assert!((area - 100.0).abs() < 1e-10, "10x10 square should have area 100, got {}", area);
        assert!(!poly.is_clockwise());
    }

    #[test]
    fn signed_area_cw_negative() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ]);
        let area = poly.signed_area();
        assert!(area < 0.0, "CW polygon should have negative signed area, got {}", area);
        assert!(poly.is_clockwise());
    }

    #[test]
    fn area_winding_independent() {
        let ccw = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        let mut reversed = ccw.outline.clone();
        reversed.reverse();
        let cw = Polygon::new(reversed);
        assert_eq!(ccw.area(), cw.area());
        assert_eq!(ccw.area(), 100.0);
    }

    #[test]
    fn area_cyclic_rotation_invariant() {
        let verts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        let base = Polygon::new(verts.clone()).area();
        for shift in 1..verts.len() {
            let mut rotated = verts.clone();
            rotated.rotate_left(shift);
            let area = Polygon::new(rotated).area();
            assert!((area - base).abs() < 1e-10,
                "area changed under cyclic rotation by {}: {} vs {}", shift, area, base);
        }
    }

    #[test]
    fn degenerate_outline_zero_area() {
        let poly = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
        assert_eq!(poly.area(), 0.0);
    }

    #[test]
    fn circle_area() {
        let c = Circle::new(Point::new(0.0, 0.0), 2.0, "a0_r0_c0".to_string());
        assert!((c.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
    }
}
