//! Stats command implementation.

use std::fs;

use pelmeni::{DEFAULT_SPACING, extract_polygons_from_svg};

use super::common::{ShapeStats, pack_shapes};

/// Execute the stats command.
pub fn cmd_stats(args: &[String]) {
    let mut svg_path: Option<&str> = None;
    let mut radius = 10.0;
    let mut spacing = DEFAULT_SPACING;

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

    let svg_content = fs::read_to_string(svg_path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", svg_path, e);
        std::process::exit(1);
    });

    let polygons = extract_polygons_from_svg(&svg_content).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {}", svg_path, e);
        std::process::exit(1);
    });

    let shapes = pack_shapes(polygons, radius, spacing, None);

    let mut total_circles = 0;
    println!("═══════════════════════════════════════════════");
    println!("  PACKING STATS: {}", svg_path);
    println!("═══════════════════════════════════════════════");
    for shape in &shapes {
        let stats = ShapeStats::derive(&shape.polygon, &shape.result);
        total_circles += stats.count;

        let label = shape
            .polygon
            .id
            .clone()
            .unwrap_or_else(|| format!("shape {}", shape.index));
        println!("  {}", label);
        println!("    Area:       {:.1}", stats.area);
        println!("    Diameter:   {:.1}", shape.radius * 2.0);
        println!("    Gap:        {:.1}", shape.spacing);
        println!("    Circles:    {}", stats.count);
        println!("    Efficiency: {:.1}%", stats.efficiency_percent);
        println!("    Best angle: {:.0}°", shape.result.angle_deg);
    }
    println!("───────────────────────────────────────────────");
    println!("  Shapes: {}  Total circles: {}", shapes.len(), total_circles);
    println!("═══════════════════════════════════════════════");
}

fn print_usage() {
    eprintln!("Usage: pelmeni stats <input.svg> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --radius <n>     Circle radius (default: 10)");
    eprintln!("  -s, --spacing <n>    Gap between circles (default: {})", DEFAULT_SPACING);
    eprintln!();
    eprintln!("Prints per-shape area, circle count and packing efficiency.");
}
