//! SVG parsing - extract sheet outlines from SVG files.
//!
//! Uses usvg for complete SVG resolution (CSS, transforms, etc.)
//! then walks the tree to extract path data as polygons.
//!
//! ## Curve Flattening
//!
//! SVG paths contain Bézier curves (cubic and quadratic). These must be
//! "flattened" into line segments for polygon operations. We use lyon_geom
//! for accurate curve approximation with a configurable tolerance.
//!
//! ## data-* attributes
//!
//! Shapes may carry per-shape packing overrides as `data-radius` and
//! `data-spacing` attributes. usvg drops unknown attributes when
//! resolving the tree, so a second quick-xml streaming pass collects
//! them keyed by element id and merges them onto the extracted
//! polygons. Values are parsed as SVG lengths (svgtypes), so `3mm` and
//! `12` both work.

use std::collections::HashMap;

use crate::geometry::{Point, Polygon};
use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use svgtypes::{Length, LengthUnit};

/// Error type for SVG parsing.
#[derive(Debug)]
pub enum SvgError {
    ParseError(String),
    NoPolygons,
}

impl std::fmt::Display for SvgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvgError::ParseError(msg) => write!(f, "SVG parse error: {}", msg),
            SvgError::NoPolygons => write!(f, "No polygons found in SVG"),
        }
    }
}

impl std::error::Error for SvgError {}

/// Extract all polygons from an SVG file, with any per-shape
/// `data-radius` / `data-spacing` overrides attached.
pub fn extract_polygons_from_svg(svg_content: &str) -> Result<Vec<Polygon>, SvgError> {
    // Parse SVG using usvg (resolves CSS, transforms, etc.)
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| SvgError::ParseError(e.to_string()))?;

    let mut polygons = Vec::new();
    extract_from_group(tree.root(), &mut polygons);

    if polygons.is_empty() {
        return Err(SvgError::NoPolygons);
    }

    // usvg drops data-* attributes, collect them separately
    let overrides = collect_data_attributes(svg_content);
    for polygon in &mut polygons {
        if let Some(id) = &polygon.id {
            if let Some(attrs) = overrides.get(id) {
                polygon.data_radius = attrs.radius;
                polygon.data_spacing = attrs.spacing;
            }
        }
    }

    Ok(polygons)
}

/// Recursively extract polygons from a usvg Group.
fn extract_from_group(group: &usvg::Group, polygons: &mut Vec<Polygon>) {
    for child in group.children() {
        extract_from_node(child, polygons);
    }
}

fn extract_from_node(node: &usvg::Node, polygons: &mut Vec<Polygon>) {
    match node {
        usvg::Node::Group(group) => {
            extract_from_group(group, polygons);
        }
        usvg::Node::Path(path) => {
            if let Some(polygon) = path_to_polygon(path) {
                polygons.push(polygon);
            }
        }
        // Ignore text, images, etc.
        _ => {}
    }
}

/// Tolerance for curve flattening.
/// Lower = more points, smoother curves, slower.
const CURVE_TOLERANCE: f32 = 0.1;

/// Convert a usvg path to our Polygon type.
///
/// Flattens Bézier curves using lyon_geom so curved outlines become
/// dense polygon boundaries.
fn path_to_polygon(path: &usvg::Path) -> Option<Polygon> {
    let data = path.data();
    let id = path.id();

    let mut points = Vec::new();
    let mut last_point: Option<(f32, f32)> = None;

    for cmd in data.segments() {
        match cmd {
            usvg::tiny_skia_path::PathSegment::MoveTo(p) => {
                // Start of new subpath - only the first one counts,
                // holes are out of scope
                if !points.is_empty() {
                    break;
                }
                points.push(Point::new(p.x as f64, p.y as f64));
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::LineTo(p) => {
                points.push(Point::new(p.x as f64, p.y as f64));
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::QuadTo(ctrl, p) => {
                if let Some((lx, ly)) = last_point {
                    let curve = QuadraticBezierSegment {
                        from: point(lx, ly),
                        ctrl: point(ctrl.x, ctrl.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |segment| {
                        points.push(Point::new(segment.to.x as f64, segment.to.y as f64));
                    });
                } else {
                    points.push(Point::new(p.x as f64, p.y as f64));
                }
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                if let Some((lx, ly)) = last_point {
                    let curve = CubicBezierSegment {
                        from: point(lx, ly),
                        ctrl1: point(ctrl1.x, ctrl1.y),
                        ctrl2: point(ctrl2.x, ctrl2.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |segment| {
                        points.push(Point::new(segment.to.x as f64, segment.to.y as f64));
                    });
                } else {
                    points.push(Point::new(p.x as f64, p.y as f64));
                }
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::Close => {
                // Path is closed - we have a polygon
            }
        }
    }

    // Remove duplicate consecutive points from curve flattening
    if points.len() >= 2 {
        points.dedup_by(|a, b| {
            let dx = (a.x - b.x).abs();
            let dy = (a.y - b.y).abs();
            dx < 1e-6 && dy < 1e-6
        });
    }

    if points.len() >= 3 {
        let polygon_id = if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        };
        Some(Polygon::with_id(points, polygon_id))
    } else {
        None
    }
}

/// Per-shape overrides found during the streaming pass.
#[derive(Debug, Clone, Copy, Default)]
struct DataAttributes {
    radius: Option<f64>,
    spacing: Option<f64>,
}

/// Stream the raw XML once and collect data-radius / data-spacing
/// attributes keyed by element id.
///
/// Best-effort: a malformed document just yields an empty map, the
/// real parse errors surface from usvg.
fn collect_data_attributes(svg_content: &str) -> HashMap<String, DataAttributes> {
    let mut reader = Reader::from_str(svg_content);
    reader.config_mut().trim_text(true);

    let mut map = HashMap::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let mut id: Option<String> = None;
                let mut attrs = DataAttributes::default();

                for attr in e.attributes().flatten() {
                    let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
                    let value = std::str::from_utf8(&attr.value).unwrap_or("");
                    match key {
                        "id" => id = Some(value.to_string()),
                        "data-radius" => attrs.radius = parse_length(value),
                        "data-spacing" => attrs.spacing = parse_length(value),
                        _ => {}
                    }
                }

                if let Some(id) = id {
                    if attrs.radius.is_some() || attrs.spacing.is_some() {
                        map.insert(id, attrs);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    map
}

/// Parse an SVG length into user units (96 dpi, usvg's convention).
fn parse_length(value: &str) -> Option<f64> {
    let length: Length = value.trim().parse().ok()?;
    let px = match length.unit {
        LengthUnit::None | LengthUnit::Px => length.number,
        LengthUnit::Mm => length.number * 96.0 / 25.4,
        LengthUnit::Cm => length.number * 96.0 / 2.54,
        LengthUnit::In => length.number * 96.0,
        LengthUnit::Pt => length.number * 96.0 / 72.0,
        LengthUnit::Pc => length.number * 16.0,
        // Relative units have no meaning for a packing radius
        LengthUnit::Em | LengthUnit::Ex | LengthUnit::Percent => return None,
    };
    (px > 0.0).then_some(px)
}

// ============================================================================
// TESTS
// ============================================================================
