//! Rigid rotation of point lattices.

use nalgebra::{matrix, Matrix2};

use crate::grid::PointGrid;

/// Counterclockwise rotation matrix for `theta` radians:
/// `[[cos θ, −sin θ], [sin θ, cos θ]]`.
#[inline]
pub fn rotation_matrix(theta: f64) -> Matrix2<f64> {
    matrix![theta.cos(), -theta.sin(); theta.sin(), theta.cos()]
}

/// Rotate every lattice point about the origin by the absolute angle `theta`.
///
/// Pure: returns a new grid of the same shape, the input is not mutated.
/// Defined for any finite `theta`; the sweep only feeds `[0, π/2]`.
pub fn rotate(points: &PointGrid, theta: f64) -> PointGrid {
    let r = rotation_matrix(theta);
    let pts = points.points().iter().map(|p| r * p).collect();
    PointGrid::from_rows(pts, points.rows(), points.cols())
}
