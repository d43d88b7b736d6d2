//! Rectangular extents and D×D point lattices (the sampler).
//!
//! Purpose
//! - Provide the two immutable inputs of the overlap sweep: a validated
//!   axis-aligned `Extent` and a regular `PointGrid` sampled over it.
//! - Both are built once at startup and read-only afterwards; rotation
//!   always produces a fresh grid.
//!
//! Why inclusive lattices
//! - `make_grid` spans both endpoints on each axis (outer product of two
//!   inclusive linspaces), so the lattice corners coincide with the extent
//!   corners and membership at the boundary is well-defined.

mod sample;
mod types;

pub use sample::make_grid;
pub use types::{Extent, PointGrid};

pub(crate) use sample::linspace;
