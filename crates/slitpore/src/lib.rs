//! Slit/pore rotation-overlap core.
//!
//! Purpose
//! - Measure the time-varying geometric overlap between a revolving
//!   rectangular slit and a fixed rectangular pore by rotating a dense point
//!   lattice and classifying the rotated samples against the pore bounds.
//! - Keep the API minimal and pure: grids and extents are built once,
//!   rotation and reduction are side-effect-free, and the sweep is a lazy
//!   per-angle map feeding a renderer that lives outside this crate.
//!
//! Layout
//! - `grid`: extents and D×D point lattices (the sampler).
//! - `overlap`: rotation, overlap percentage, and the angle sweep (the engine).

pub mod grid;
pub mod overlap;

mod error;

pub use error::{Error, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers can write the math in 2-vector notation.
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{make_grid, Extent, PointGrid};
    pub use crate::overlap::{
        angle_sweep, overlap_percentage, rotate, rotation_matrix, sweep, Frame, Sweep,
    };
    pub use crate::{Error, Result};
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
