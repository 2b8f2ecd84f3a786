//! # pelmeni
//!
//! Core geometry and circle packing library.
//!
//! Given a simple polygon (a dough sheet outline), a circle radius and
//! a minimum gap, find the hexagonal-lattice arrangement that fits the
//! most non-overlapping circles fully inside the outline. The search
//! is a bounded sweep over discrete lattice rotations and phase
//! offsets - reproducible and fast, not provably optimal.
//!
//! The whole crate is synchronous and pure: no I/O besides parsing the
//! SVG string handed in, no logging, no shared state. A host wanting
//! responsiveness runs [`pack_circles`] on a worker thread and ships
//! the [`PackingResult`] back itself.

pub mod containment;
pub mod geometry;
pub mod lattice;
pub mod packing;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use containment::{distance_to_edge, point_in_polygon, point_segment_distance};
pub use geometry::{Circle, Point, Polygon, signed_area_of_points};
pub use lattice::{HexLattice, LatticeCell};
pub use packing::{DEFAULT_SPACING, PackConfig, PackingResult, pack_circles, pack_circles_with};
pub use svg::{SvgError, extract_polygons_from_svg};
