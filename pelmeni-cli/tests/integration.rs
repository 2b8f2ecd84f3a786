//! Integration tests for pelmeni CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the pelmeni binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from pelmeni-cli to the workspace root

    // Try release first, then debug
    let release = path.join("target/release/pelmeni");
    if release.exists() {
        return release;
    }
    path.join("target/debug/pelmeni")
}

/// Get the path to the test SVG fixture.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sheet.svg")
}

#[test]
fn pack_command_produces_svg() {
    let output = Command::new(binary_path())
        .args(["pack", fixture_path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "pack should exit 0");
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("<circle"), "Should place circles");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
    // viewBox carried over from the input
    assert!(stdout.contains("viewBox=\"0 0 300 200\""));
}

#[test]
fn pack_command_produces_json() {
    let output = Command::new(binary_path())
        .args(["pack", fixture_path().to_str().unwrap(), "-f", "json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should parse");
    let shapes = parsed["shapes"].as_array().expect("shapes array");
    assert_eq!(shapes.len(), 2);

    // The scrap shape carries its own data-radius
    let scrap = shapes
        .iter()
        .find(|s| s["id"] == "scrap")
        .expect("scrap shape present");
    assert_eq!(scrap["radius"], 8.0);
    assert_eq!(scrap["spacing"], 1.0);
    assert!(scrap["stats"]["count"].as_u64().unwrap() > 0);

    // Efficiency is a percentage below the hex-packing bound
    for shape in shapes {
        let eff = shape["stats"]["efficiency_percent"].as_f64().unwrap();
        assert!(eff >= 0.0 && eff < 91.0, "efficiency out of range: {}", eff);
    }
}

#[test]
fn pack_command_is_deterministic() {
    let run = || {
        Command::new(binary_path())
            .args(["pack", fixture_path().to_str().unwrap(), "-f", "json"])
            .output()
            .expect("Failed to execute command")
            .stdout
    };
    assert_eq!(run(), run(), "identical input should produce identical output");
}

#[test]
fn pack_rejects_bad_radius() {
    let output = Command::new(binary_path())
        .args(["pack", fixture_path().to_str().unwrap(), "-r", "-5"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "negative radius should fail");
}

#[test]
fn stats_command_prints_summary() {
    let output = Command::new(binary_path())
        .args(["stats", fixture_path().to_str().unwrap(), "-r", "12"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("PACKING STATS"));
    assert!(stdout.contains("big-sheet"));
    assert!(stdout.contains("scrap"));
    assert!(stdout.contains("Efficiency"));
}

#[test]
fn demo_command_output_packs() {
    let output = Command::new(binary_path())
        .args(["demo", "--seed", "42"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("demo-sheet"));

    // Feed the demo output straight back into the library
    let polygons = pelmeni::extract_polygons_from_svg(&stdout).expect("demo SVG parses");
    assert_eq!(polygons.len(), 1);
    let result = pelmeni::pack_circles(&polygons[0], 20.0, 2.0);
    assert!(!result.is_empty(), "demo sheet should fit circles");
}

#[test]
fn unknown_command_fails() {
    let output = Command::new(binary_path())
        .arg("frobnicate")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command"));
}

#[test]
fn batch_command_runs_jobs() {
    let dir = std::env::temp_dir().join(format!("pelmeni-batch-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let yaml = format!(
        "name: test-batch\njobs:\n  - name: sheet\n    input: {}\n    radius: 12\n",
        fixture_path().display()
    );
    let batch_path = dir.join("jobs.yaml");
    std::fs::write(&batch_path, yaml).unwrap();

    let out_dir = dir.join("out");
    let output = Command::new(binary_path())
        .args([
            "batch",
            batch_path.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "batch should exit 0: {}", String::from_utf8_lossy(&output.stderr));
    assert!(out_dir.join("sheet.svg").exists(), "per-job SVG written");

    let report = std::fs::read_to_string(out_dir.join("report.json")).expect("report written");
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(parsed["batch"], "test-batch");
    assert!(parsed["generated_at"].as_str().unwrap().contains('T'));
    assert_eq!(parsed["jobs"].as_array().unwrap().len(), 1);

    std::fs::remove_dir_all(&dir).ok();
}
