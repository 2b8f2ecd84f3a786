//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `pack` - Pack circles into SVG outlines, emit SVG or JSON
//! - `stats` - Per-shape area, count and efficiency summary
//! - `batch` - Run many packing jobs from a YAML file
//! - `render` - Rasterize a packing to PNG
//! - `demo` - Generate a random sheet outline to try the packer on
//! - `benchmark` - Benchmark the packing sweep

pub mod batch;
pub mod benchmark;
pub mod common;
pub mod demo;
pub mod pack;
pub mod render;
pub mod stats;

pub use batch::cmd_batch;
pub use benchmark::cmd_benchmark;
pub use demo::cmd_demo;
pub use pack::cmd_pack;
pub use render::cmd_render;
pub use stats::cmd_stats;
