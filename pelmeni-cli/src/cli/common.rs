//! Common utilities shared across CLI commands.

use serde::Serialize;

use pelmeni::{PackConfig, PackingResult, Polygon};

/// Output format for packing results.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Caller-side statistics for one packed shape.
///
/// The core exposes area and count; efficiency is derived here at the
/// boundary, not inside the library.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeStats {
    /// Polygon area in SVG user units squared
    pub area: f64,
    /// Number of circles placed
    pub count: usize,
    /// Total circle area / polygon area, as a percentage
    pub efficiency_percent: f64,
}

impl ShapeStats {
    /// Derive stats for a shape's packing result.
    pub fn derive(polygon: &Polygon, result: &PackingResult) -> Self {
        let area = polygon.area();
        let circle_area: f64 = result.circles.iter().map(|c| c.area()).sum();
        let efficiency_percent = if area > 0.0 {
            circle_area / area * 100.0
        } else {
            0.0
        };
        Self {
            area,
            count: result.count(),
            efficiency_percent,
        }
    }
}

/// One packed shape paired with its source polygon.
pub struct PackedShape {
    pub index: usize,
    pub polygon: Polygon,
    pub radius: f64,
    pub spacing: f64,
    pub result: PackingResult,
}

/// Pack every polygon in a parsed sheet.
///
/// Per-shape `data-radius` / `data-spacing` attributes override the
/// command-line values; the sweep grid is shared.
pub fn pack_shapes(
    polygons: Vec<Polygon>,
    radius: f64,
    spacing: f64,
    angles_deg: Option<&[f64]>,
) -> Vec<PackedShape> {
    polygons
        .into_iter()
        .enumerate()
        .map(|(index, polygon)| {
            let radius = polygon.data_radius.unwrap_or(radius);
            let spacing = polygon.data_spacing.unwrap_or(spacing);
            let mut config = PackConfig::new(radius, spacing);
            if let Some(angles) = angles_deg {
                config.angles_deg = angles.to_vec();
            }
            let result = pelmeni::pack_circles_with(&polygon, &config);
            PackedShape {
                index,
                polygon,
                radius,
                spacing,
                result,
            }
        })
        .collect()
}

/// Convert packed shapes to an SVG overlay.
///
/// Outlines in light gray, circles stroked on top, original viewBox
/// preserved so the overlay aligns with the input file.
pub fn packing_to_svg(shapes: &[PackedShape], original_svg: &str) -> String {
    let viewbox = extract_viewbox(original_svg).unwrap_or_else(|| "0 0 1000 1000".to_string());

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">
"#,
        viewbox
    ));

    // Outlines first so circles draw on top
    svg.push_str("<g stroke=\"#cccccc\" stroke-width=\"0.5\" fill=\"none\">\n");
    for shape in shapes {
        let points = &shape.polygon.outline;
        if points.len() >= 2 {
            svg.push_str("  <path d=\"M");
            for (i, pt) in points.iter().enumerate() {
                if i == 0 {
                    svg.push_str(&format!("{:.2},{:.2}", pt.x, pt.y));
                } else {
                    svg.push_str(&format!(" L{:.2},{:.2}", pt.x, pt.y));
                }
            }
            svg.push_str(" Z\"/>\n");
        }
    }
    svg.push_str("</g>\n");

    for shape in shapes {
        let group_id = shape
            .polygon
            .id
            .clone()
            .unwrap_or_else(|| format!("shape-{}", shape.index));
        svg.push_str(&format!(
            "<g id=\"{}-pack\" stroke=\"black\" stroke-width=\"0.5\" fill=\"none\">\n",
            group_id
        ));
        for circle in &shape.result.circles {
            svg.push_str(&format!(
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>\n",
                circle.center.x, circle.center.y, circle.radius
            ));
        }
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Extract viewBox from SVG content.
pub fn extract_viewbox(svg: &str) -> Option<String> {
    // Try viewBox (camelCase)
    if let Some(start) = svg.find("viewBox=\"") {
        let rest = &svg[start + 9..];
        if let Some(end) = rest.find('"') {
            return Some(rest[..end].to_string());
        }
    }
    // Try viewbox (lowercase)
    if let Some(start) = svg.find("viewbox=\"") {
        let rest = &svg[start + 9..];
        if let Some(end) = rest.find('"') {
            return Some(rest[..end].to_string());
        }
    }
    None
}

/// Parse a comma-separated angle list like "0,15,30".
pub fn parse_angle_list(value: &str) -> Option<Vec<f64>> {
    let angles: Result<Vec<f64>, _> = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect();
    angles.ok().filter(|a| !a.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelmeni::{Point, pack_circles};

    fn square(side: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side, side),
            Point::new(0.0, side),
        ])
    }

    #[test]
    fn stats_for_square() {
        let poly = square(100.0);
        let result = pack_circles(&poly, 10.0, 2.0);
        let stats = ShapeStats::derive(&poly, &result);
        assert_eq!(stats.area, 10000.0);
        assert_eq!(stats.count, result.count());
        assert!(stats.efficiency_percent > 0.0);
        // Hex packing tops out at ~90.7%, anything above is a bug
        assert!(stats.efficiency_percent < 91.0);
    }

    #[test]
    fn stats_degenerate_area() {
        let poly = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let result = pack_circles(&poly, 10.0, 2.0);
        let stats = ShapeStats::derive(&poly, &result);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.efficiency_percent, 0.0);
    }

    #[test]
    fn data_attributes_override_flags() {
        let mut poly = square(100.0);
        poly.data_radius = Some(20.0);
        let shapes = pack_shapes(vec![poly], 10.0, 2.0, None);
        assert_eq!(shapes[0].radius, 20.0);
        for c in &shapes[0].result.circles {
            assert_eq!(c.radius, 20.0);
        }
    }

    #[test]
    fn svg_output_contains_circles() {
        let shapes = pack_shapes(vec![square(100.0)], 10.0, 2.0, None);
        let svg = packing_to_svg(&shapes, "<svg viewBox=\"0 0 100 100\"></svg>");
        assert!(svg.contains("viewBox=\"0 0 100 100\""));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn viewbox_extraction() {
        assert_eq!(
            extract_viewbox("<svg viewBox=\"0 0 10 20\">"),
            Some("0 0 10 20".to_string())
        );
        assert_eq!(extract_viewbox("<svg>"), None);
    }

    #[test]
    fn angle_list_parsing() {
        assert_eq!(parse_angle_list("0,15, 30"), Some(vec![0.0, 15.0, 30.0]));
        assert_eq!(parse_angle_list("0,abc"), None);
    }
}
