//! Pack command implementation.

use std::fs;

use serde::Serialize;

use pelmeni::{DEFAULT_SPACING, extract_polygons_from_svg};

use super::common::{
    OutputFormat, PackedShape, ShapeStats, pack_shapes, packing_to_svg, parse_angle_list,
};

/// A placed circle in JSON output format.
#[derive(Serialize)]
struct JsonCircle {
    x: f64,
    y: f64,
    r: f64,
    id: String,
}

/// A packed shape in JSON output format.
#[derive(Serialize)]
struct JsonShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    index: usize,
    radius: f64,
    spacing: f64,
    /// Winning lattice rotation, degrees
    angle_deg: f64,
    circles: Vec<JsonCircle>,
    stats: ShapeStats,
}

/// Top-level JSON output.
#[derive(Serialize)]
struct JsonOutput {
    shapes: Vec<JsonShape>,
}

/// Execute the pack command.
pub fn cmd_pack(args: &[String]) {
    let mut svg_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut radius = 10.0;
    let mut spacing = DEFAULT_SPACING;
    let mut angles: Option<Vec<f64>> = None;
    let mut format = OutputFormat::Svg;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-r" | "--radius" => {
                i += 1;
                if i < args.len() {
                    radius = args[i].parse().unwrap_or(10.0);
                }
            }
            "-s" | "--spacing" => {
                i += 1;
                if i < args.len() {
                    spacing = args[i].parse().unwrap_or(DEFAULT_SPACING);
                }
            }
            "-a" | "--angles" => {
                i += 1;
                if i < args.len() {
                    angles = parse_angle_list(&args[i]);
                    if angles.is_none() {
                        eprintln!("Invalid angle list: {}", args[i]);
                        std::process::exit(1);
                    }
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = match args[i].to_lowercase().as_str() {
                        "json" => OutputFormat::Json,
                        "svg" => OutputFormat::Svg,
                        other => {
                            eprintln!("Unknown format: {}. Use 'svg' or 'json'.", other);
                            std::process::exit(1);
                        }
                    };
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            path if !path.starts_with('-') => {
                if svg_path.is_none() {
                    svg_path = Some(path);
                }
            }
            _ => {}
        }
        i += 1;
    }

    let svg_path = svg_path.unwrap_or_else(|| {
        eprintln!("Error: SVG file required");
        print_usage();
        std::process::exit(1);
    });

    if radius <= 0.0 {
        eprintln!("Error: radius must be positive, got {}", radius);
        std::process::exit(1);
    }
    if spacing < 0.0 {
        eprintln!("Error: spacing must be non-negative, got {}", spacing);
        std::process::exit(1);
    }

    let svg_content = fs::read_to_string(svg_path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", svg_path, e);
        std::process::exit(1);
    });

    let polygons = extract_polygons_from_svg(&svg_content).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {}", svg_path, e);
        std::process::exit(1);
    });

    let shapes = pack_shapes(polygons, radius, spacing, angles.as_deref());

    let output = match format {
        OutputFormat::Svg => packing_to_svg(&shapes, &svg_content),
        OutputFormat::Json => to_json(&shapes),
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            }
            let total: usize = shapes.iter().map(|s| s.result.count()).sum();
            eprintln!("Packed {} circles across {} shapes -> {}", total, shapes.len(), path);
        }
        None => {
            print!("{}", output);
        }
    }
}

fn to_json(shapes: &[PackedShape]) -> String {
    let output = JsonOutput {
        shapes: shapes
            .iter()
            .map(|shape| JsonShape {
                id: shape.polygon.id.clone(),
                index: shape.index,
                radius: shape.radius,
                spacing: shape.spacing,
                angle_deg: shape.result.angle_deg,
                circles: shape
                    .result
                    .circles
                    .iter()
                    .map(|c| JsonCircle {
                        x: c.center.x,
                        y: c.center.y,
                        r: c.radius,
                        id: c.id.clone(),
                    })
                    .collect(),
                stats: ShapeStats::derive(&shape.polygon, &shape.result),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {}", e);
        std::process::exit(1);
    })
}

fn print_usage() {
    eprintln!("Usage: pelmeni pack <input.svg> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --radius <n>       Circle radius (default: 10)");
    eprintln!("  -s, --spacing <n>      Gap between circles (default: {})", DEFAULT_SPACING);
    eprintln!("  -a, --angles <a,b,c>   Lattice rotations to try, degrees");
    eprintln!("                         (default: 0,15,30,45,60)");
    eprintln!("  -f, --format <fmt>     Output format: svg or json (default: svg)");
    eprintln!("  -o, --output <file>    Write to file instead of stdout");
    eprintln!();
    eprintln!("Shapes may override radius/spacing with data-radius and");
    eprintln!("data-spacing attributes (requires an id on the element).");
}
