//! Batch command: run many packing jobs from a YAML file.
//!
//! A batch file names a set of input sheets with per-job radius and
//! spacing; each job produces an SVG overlay and the run produces a
//! single JSON report.
//!
//! ```yaml
//! name: tuesday-prep
//! jobs:
//!   - name: big-sheet
//!     input: sheets/big.svg
//!     radius: 12
//!   - name: scraps
//!     input: sheets/scraps.svg
//!     radius: 8
//!     spacing: 1.5
//!     angles: [0, 30, 60]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use pelmeni::{DEFAULT_SPACING, extract_polygons_from_svg};

use super::common::{ShapeStats, pack_shapes, packing_to_svg};

/// A complete batch of packing jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Batch name, used for the report header
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Jobs to run, in order
    pub jobs: Vec<Job>,
}

/// A single packing job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Job name (also the output file stem)
    pub name: String,

    /// Input SVG path, relative to the batch file
    pub input: String,

    /// Circle radius
    pub radius: f64,

    /// Gap between circles
    #[serde(default = "default_spacing")]
    pub spacing: f64,

    /// Optional sweep angles override (degrees)
    #[serde(default)]
    pub angles: Option<Vec<f64>>,
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING
}

impl Batch {
    /// Load a batch from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read batch file: {}", e))?;

        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse batch YAML: {}", e))
    }
}

/// Per-shape entry in the JSON report.
#[derive(Serialize)]
struct ReportShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    index: usize,
    radius: f64,
    stats: ShapeStats,
}

/// Per-job entry in the JSON report.
#[derive(Serialize)]
struct ReportJob {
    name: String,
    input: String,
    output: String,
    shapes: Vec<ReportShape>,
}

/// The JSON report for one batch run.
#[derive(Serialize)]
struct Report {
    batch: String,
    generated_at: String,
    jobs: Vec<ReportJob>,
}

/// Execute the batch command.
pub fn cmd_batch(args: &[String]) {
    let mut batch_path: Option<&str> = None;
    let mut out_dir = "batch-output".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    out_dir = args[i].clone();
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            path if !path.starts_with('-') => {
                if batch_path.is_none() {
                    batch_path = Some(path);
                }
            }
            _ => {}
        }
        i += 1;
    }

    let batch_path = batch_path.unwrap_or_else(|| {
        eprintln!("Error: batch YAML file required");
        print_usage();
        std::process::exit(1);
    });

    let batch = Batch::load(batch_path).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    if batch.jobs.is_empty() {
        eprintln!("Batch '{}' has no jobs", batch.name);
        std::process::exit(1);
    }

    let out_dir = PathBuf::from(out_dir);
    if let Err(e) = fs::create_dir_all(&out_dir) {
        eprintln!("Failed to create {}: {}", out_dir.display(), e);
        std::process::exit(1);
    }

    // Inputs resolve relative to the batch file
    let base = Path::new(batch_path).parent().unwrap_or(Path::new("."));

    println!("Batch: {} ({} jobs)", batch.name, batch.jobs.len());

    let mut report_jobs = Vec::new();

    for job in &batch.jobs {
        let input_path = base.join(&job.input);
        let svg_content = match fs::read_to_string(&input_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("  {} SKIPPED: failed to read {}: {}", job.name, input_path.display(), e);
                continue;
            }
        };

        let polygons = match extract_polygons_from_svg(&svg_content) {
            Ok(polygons) => polygons,
            Err(e) => {
                eprintln!("  {} SKIPPED: {}", job.name, e);
                continue;
            }
        };

        let shapes = pack_shapes(polygons, job.radius, job.spacing, job.angles.as_deref());

        let output_path = out_dir.join(format!("{}.svg", job.name));
        let svg = packing_to_svg(&shapes, &svg_content);
        if let Err(e) = fs::write(&output_path, &svg) {
            eprintln!("  {} FAILED: write {}: {}", job.name, output_path.display(), e);
            continue;
        }

        let total: usize = shapes.iter().map(|s| s.result.count()).sum();
        println!("  {} -> {} ({} circles)", job.name, output_path.display(), total);

        report_jobs.push(ReportJob {
            name: job.name.clone(),
            input: job.input.clone(),
            output: output_path.display().to_string(),
            shapes: shapes
                .iter()
                .map(|shape| ReportShape {
                    id: shape.polygon.id.clone(),
                    index: shape.index,
                    radius: shape.radius,
                    stats: ShapeStats::derive(&shape.polygon, &shape.result),
                })
                .collect(),
        });
    }

    let report = Report {
        batch: batch.name.clone(),
        generated_at: Utc::now().to_rfc3339(),
        jobs: report_jobs,
    };

    let report_path = out_dir.join("report.json");
    let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        eprintln!("Failed to serialize report: {}", e);
        std::process::exit(1);
    });
    if let Err(e) = fs::write(&report_path, json) {
        eprintln!("Failed to write {}: {}", report_path.display(), e);
        std::process::exit(1);
    }

    println!("Report: {}", report_path.display());
}

fn print_usage() {
    eprintln!("Usage: pelmeni batch <jobs.yaml> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <dir>    Output directory (default: batch-output)");
    eprintln!();
    eprintln!("Runs every job in the YAML file, writing one SVG per job");
    eprintln!("and a report.json for the whole run.");
}
