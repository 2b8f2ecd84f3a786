//! Benchmark command implementation.

use std::fs;
use std::time::Instant;

use pelmeni::{DEFAULT_SPACING, extract_polygons_from_svg, pack_circles};

/// Execute the benchmark command.
pub fn cmd_benchmark(args: &[String]) {
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

    println!("Loading: {}", svg_path);
    let start_load = Instant::now();

    let svg_content = fs::read_to_string(svg_path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", svg_path, e);
        std::process::exit(1);
    });

    let polygons = extract_polygons_from_svg(&svg_content).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {}", svg_path, e);
        std::process::exit(1);
    });

    let load_time = start_load.elapsed();
    println!("Loaded {} polygons in {:?}", polygons.len(), load_time);

    println!("\nPacking at radius {} spacing {}...", radius, spacing);
    let start = Instant::now();

    let mut total_circles = 0;
    for polygon in &polygons {
        let result = pack_circles(polygon, radius, spacing);
        total_circles += result.count();
    }

    let elapsed = start.elapsed();

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  PACKING BENCHMARK");
    println!("═══════════════════════════════════════════════");
    println!("  Polygons: {}", polygons.len());
    println!("  Circles placed: {}", total_circles);
    println!("  Time: {:?}", elapsed);
    println!("  Time (ms): {:.2}", elapsed.as_secs_f64() * 1000.0);
    println!("  Avg per polygon: {:.3}ms", elapsed.as_secs_f64() * 1000.0 / polygons.len() as f64);
    println!("═══════════════════════════════════════════════");
}

fn print_usage() {
    eprintln!("Usage: pelmeni benchmark <input.svg> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --radius <n>     Circle radius (default: 10)");
    eprintln!("  -s, --spacing <n>    Gap between circles (default: {})", DEFAULT_SPACING);
    eprintln!();
    eprintln!("Benchmarks the packing sweep.");
}
