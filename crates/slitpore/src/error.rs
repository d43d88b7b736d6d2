//! Error kinds for grid construction and overlap computation.
//!
//! All errors are raised synchronously at the point of construction or
//! computation and propagate directly to the caller; there is no retry,
//! recovery, or partial result.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, self::Error>;

/// Errors that can occur while sampling grids or reducing overlaps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Rectangle bounds are malformed: empty on either axis, or non-finite.
    #[error(
        "invalid extent [{x_min}, {x_max}] x [{y_min}, {y_max}]: \
         need finite bounds with x_min < x_max and y_min < y_max"
    )]
    InvalidExtent {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    /// Lattice resolution below the two-points-per-axis minimum.
    #[error("invalid discretization {0}: need at least 2 points per axis")]
    InvalidDiscretization(usize),

    /// Overlap is undefined on a grid with zero sample points.
    #[error("empty grid: overlap is undefined without sample points")]
    EmptyGrid,
}
