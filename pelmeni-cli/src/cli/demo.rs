//! Demo command: generate a random dough-sheet outline.
//!
//! Produces a blob polygon by walking angles around a center and
//! jittering the radius. Vertices come out in strictly increasing
//! angular order, so the outline cannot self-intersect - the packer's
//! simplicity assumption holds by construction.

use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::{Rng, RngCore};

use pelmeni::{Point, Polygon};

/// Execute the demo command.
pub fn cmd_demo(args: &[String]) {
    let mut output_path: Option<&str> = None;
    let mut seed: Option<u64> = None;
    let mut vertices = 16usize;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--vertices" => {
                i += 1;
                if i < args.len() {
                    vertices = args[i].parse().unwrap_or(16);
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let mut rng: Box<dyn RngCore> = match seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(StdRng::from_os_rng()),
    };

    let polygon = random_blob(&mut rng, vertices.max(4), 500.0, 500.0, 400.0);
    let svg = blob_to_svg(&polygon);

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &svg) {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Wrote demo sheet with {} vertices -> {}", polygon.outline.len(), path);
        }
        None => {
            print!("{}", svg);
        }
    }
}

/// Generate a random simple blob polygon around (cx, cy).
///
/// Radius jitters in [0.45, 1.0] of `max_radius`; the lower bound
/// keeps the blob from pinching into slivers no circle could fit.
pub fn random_blob(
    rng: &mut dyn RngCore,
    vertices: usize,
    cx: f64,
    cy: f64,
    max_radius: f64,
) -> Polygon {
    let mut outline = Vec::with_capacity(vertices);
    let step = std::f64::consts::TAU / vertices as f64;

    for i in 0..vertices {
        let angle = i as f64 * step;
        let r = max_radius * rng.random_range(0.45..1.0);
        outline.push(Point::new(cx + r * angle.cos(), cy + r * angle.sin()));
    }

    Polygon::with_id(outline, Some("demo-sheet".to_string()))
}

fn blob_to_svg(polygon: &Polygon) -> String {
    let mut svg = String::new();
    svg.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1000 1000">
"#,
    );
    svg.push_str("<path id=\"demo-sheet\" fill=\"none\" stroke=\"black\" d=\"M");
    for (i, pt) in polygon.outline.iter().enumerate() {
        if i == 0 {
            svg.push_str(&format!("{:.2},{:.2}", pt.x, pt.y));
        } else {
            svg.push_str(&format!(" L{:.2},{:.2}", pt.x, pt.y));
        }
    }
    svg.push_str(" Z\"/>\n</svg>\n");
    svg
}

fn print_usage() {
    eprintln!("Usage: pelmeni demo [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>   Write SVG to file instead of stdout");
    eprintln!("  --seed <n>            Random seed for reproducibility");
    eprintln!("  --vertices <n>        Outline vertex count (default: 16)");
    eprintln!();
    eprintln!("Generates a random sheet outline to try the packer on:");
    eprintln!("  pelmeni demo --seed 42 -o sheet.svg && pelmeni pack sheet.svg");
}
