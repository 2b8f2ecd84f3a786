//! Point containment and boundary clearance tests.
//!
//! This is the hot path of the packer - every lattice candidate goes
//! through these functions once per (angle, offset) combination.

use crate::geometry::Point;

/// Test if a point is inside a polygon using ray casting.
///
/// Casts a ray to the right and counts edge crossings.
/// Odd crossings = inside, even = outside.
///
/// Points exactly on an edge or vertex get an unspecified (but
/// deterministic) answer - the strict inequalities below make no
/// promise either way. Callers that need a guaranteed margin use
/// [`distance_to_edge`] instead of relying on boundary membership.
#[inline]
pub fn point_in_polygon(px: f64, py: f64, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        // Edge straddles the horizontal scanline and its x-intersection
        // lies to the right of the point
        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// Distance from a point to the closest point on a line segment.
///
/// Projects onto the infinite line through `a` and `b`, clamps the
/// projection parameter to [0, 1], and measures to the clamped point.
/// A zero-length segment degrades to plain point distance.
#[inline]
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return p.distance(a);
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest = Point::new(a.x + t * dx, a.y + t * dy);
    p.distance(closest)
}

/// Minimum distance from a point to the polygon boundary.
///
/// Exact (not approximate): the minimum over every edge, with the last
/// vertex wrapping back to the first. A circle centered at `p` stays
/// fully inside the polygon iff `p` is inside and this value is at
/// least the circle's radius.
pub fn distance_to_edge(p: Point, polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let mut min_dist = f64::INFINITY;

    for i in 0..n {
        let j = (i + 1) % n;
        let dist = point_segment_distance(p, polygon[i], polygon[j]);
        if dist < min_dist {
            min_dist = dist;
        }
    }

    min_dist
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn square10() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn square_membership() {
        let sq = square10();
        assert!(point_in_polygon(5.0, 5.0, &sq));
        assert!(!point_in_polygon(15.0, 5.0, &sq));
        assert!(!point_in_polygon(-1.0, 5.0, &sq));
    }

    #[test]
    fn membership_survives_cyclic_rotation_and_reversal() {
        let sq = square10();
        for shift in 0..sq.len() {
            let mut rotated = sq.clone();
            rotated.rotate_left(shift);
            assert!(point_in_polygon(5.0, 5.0, &rotated),
                "inside point lost under rotation by {}", shift);
            assert!(!point_in_polygon(15.0, 5.0, &rotated));

            let mut reversed = rotated;
            reversed.reverse();
            assert!(point_in_polygon(5.0, 5.0, &reversed),
                "inside point lost under reversal after rotation by {}", shift);
            assert!(!point_in_polygon(15.0, 5.0, &reversed));
        }
    }

    #[test]
    fn concave_polygon_membership() {
        // L-shape: the notch at the top right is outside
        let ell = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(2.0, 8.0, &ell));
        assert!(point_in_polygon(8.0, 2.0, &ell));
        assert!(!point_in_polygon(8.0, 8.0, &ell), "notch should be outside");
    }

    #[test]
    fn too_few_vertices_is_outside() {
        let segment = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert!(!point_in_polygon(5.0, 0.0, &segment));
    }

    #[test]
    fn segment_distance_perpendicular() {
        let d = point_segment_distance(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_clamps_to_endpoint() {
        // Projection falls past the end of the segment
        let d = point_segment_distance(
            Point::new(13.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-12); // 3-4-5 to endpoint (10,0)
    }

    #[test]
    fn segment_distance_degenerate() {
        let a = Point::new(2.0, 2.0);
        let d = point_segment_distance(Point::new(5.0, 6.0), a, a);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn edge_distance_square() {
        let sq = square10();
        // On the boundary: distance is zero
        assert!(distance_to_edge(Point::new(5.0, 0.0), &sq).abs() < 1e-12);
        // Below the bottom edge
        assert!((distance_to_edge(Point::new(5.0, -3.0), &sq) - 3.0).abs() < 1e-12);
        // Center of a 10x10 square is 5 from every edge
        assert!((distance_to_edge(Point::new(5.0, 5.0), &sq) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn edge_distance_outside_corner() {
        let sq = square10();
        // Diagonal from the (10,10) corner
        let d = distance_to_edge(Point::new(13.0, 14.0), &sq);
        assert!((d - 5.0).abs() < 1e-12);
    }
}
