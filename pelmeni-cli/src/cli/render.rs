//! Render command: rasterize a packing to PNG.
//!
//! Builds the SVG overlay, parses it back through usvg and renders
//! with resvg into a tiny-skia pixmap, then saves via the image crate.

use std::fs;

use image::{DynamicImage, RgbaImage};
use resvg::usvg;
use tiny_skia::Pixmap;

use pelmeni::{DEFAULT_SPACING, extract_polygons_from_svg};

use super::common::{pack_shapes, packing_to_svg};

/// Longest output edge in pixels.
const DEFAULT_SIZE: u32 = 1600;

/// Execute the render command.
pub fn cmd_render(args: &[String]) {
    let mut svg_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut radius = 10.0;
    let mut spacing = DEFAULT_SPACING;
    let mut size = DEFAULT_SIZE;

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
            "--size" => {
                i += 1;
                if i < args.len() {
                    size = args[i].parse().unwrap_or(DEFAULT_SIZE);
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
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
    let output_path = output_path.unwrap_or_else(|| {
        eprintln!("Error: output PNG path required (-o)");
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
    let overlay = packing_to_svg(&shapes, &svg_content);

    let img = match render_svg(&overlay, size) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Render failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = img.save(output_path) {
        eprintln!("Failed to save {}: {}", output_path, e);
        std::process::exit(1);
    }

    let total: usize = shapes.iter().map(|s| s.result.count()).sum();
    eprintln!("Rendered {} circles -> {}", total, output_path);
}

/// Render an SVG string to an image, scaling the longest edge to
/// `size` pixels on a white background.
fn render_svg(svg: &str, size: u32) -> Result<DynamicImage, String> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| e.to_string())?;

    let tree_size = tree.size();
    let (w, h) = (tree_size.width(), tree_size.height());
    if w <= 0.0 || h <= 0.0 {
        return Err("SVG has no size".to_string());
    }

    let scale = size as f32 / w.max(h);
    let width = (w * scale).ceil() as u32;
    let height = (h * scale).ceil() as u32;

    let mut pixmap =
        Pixmap::new(width.max(1), height.max(1)).ok_or("Failed to create pixmap")?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let (width, height) = (pixmap.width(), pixmap.height());
    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or("Failed to convert pixmap")?;

    Ok(DynamicImage::ImageRgba8(rgba))
}

fn print_usage() {
    eprintln!("Usage: pelmeni render <input.svg> -o <output.png> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --radius <n>     Circle radius (default: 10)");
    eprintln!("  -s, --spacing <n>    Gap between circles (default: {})", DEFAULT_SPACING);
    eprintln!("  --size <px>          Longest output edge (default: {})", DEFAULT_SIZE);
    eprintln!("  -o, --output <file>  Output PNG path (required)");
}
