//! pelmeni - CLI for circle packing on SVG outlines
//!
//! Usage:
//!   pelmeni pack <svg> [-r radius]     Pack circles, emit SVG or JSON
//!   pelmeni stats <svg> [-r radius]    Per-shape packing summary
//!   pelmeni batch <jobs.yaml>          Run a YAML batch of jobs
//!   pelmeni render <svg> -o out.png    Rasterize a packing to PNG
//!   pelmeni demo [--seed n]            Generate a random sheet outline
//!   pelmeni benchmark <svg>            Benchmark the packing sweep

use std::env;

mod cli;

use cli::{cmd_batch, cmd_benchmark, cmd_demo, cmd_pack, cmd_render, cmd_stats};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "pack" => {
                cmd_pack(&args[2..]);
                return;
            }
            "stats" => {
                cmd_stats(&args[2..]);
                return;
            }
            "batch" => {
                cmd_batch(&args[2..]);
                return;
            }
            "render" => {
                cmd_render(&args[2..]);
                return;
            }
            "demo" => {
                cmd_demo(&args[2..]);
                return;
            }
            "benchmark" => {
                cmd_benchmark(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    print_usage(args.first().map(String::as_str).unwrap_or("pelmeni"));
    std::process::exit(1);
}

fn print_usage(program: &str) {
    eprintln!("pelmeni - circle packing for dough sheets");
    eprintln!();
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  pack <svg>         Pack circles into SVG outlines (SVG/JSON out)");
    eprintln!("  stats <svg>        Per-shape area, count and efficiency");
    eprintln!("  batch <yaml>       Run many packing jobs from a YAML file");
    eprintln!("  render <svg>       Rasterize a packing to PNG");
    eprintln!("  demo               Generate a random sheet outline");
    eprintln!("  benchmark <svg>    Benchmark the packing sweep");
    eprintln!("  help               Show this message");
    eprintln!();
    eprintln!("Run '{} <command> --help' for command options.", program);
}
