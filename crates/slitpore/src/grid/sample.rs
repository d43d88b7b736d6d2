//! Regular lattice sampling over an extent.

use nalgebra::Vector2;

use super::types::{Extent, PointGrid};
use crate::error::{Error, Result};

/// `n` evenly spaced values over `[a, b]`, endpoints included.
///
/// The last element is pinned to `b` exactly so lattice corners land on the
/// extent corners regardless of rounding in the step accumulation.
pub(crate) fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2);
    let step = (b - a) / ((n - 1) as f64);
    let mut out: Vec<f64> = (0..n).map(|k| a + (k as f64) * step).collect();
    out[n - 1] = b;
    out
}

/// Sample a `discretization × discretization` lattice spanning `extent`.
///
/// The grid is the outer product of the two axis linspaces: rows scan y,
/// columns scan x. Deterministic, no side effects. Fails with
/// `InvalidDiscretization` for fewer than 2 points per axis.
pub fn make_grid(extent: &Extent, discretization: usize) -> Result<PointGrid> {
    if discretization < 2 {
        return Err(Error::InvalidDiscretization(discretization));
    }
    let xs = linspace(extent.x_min, extent.x_max, discretization);
    let ys = linspace(extent.y_min, extent.y_max, discretization);
    let mut pts = Vec::with_capacity(discretization * discretization);
    for &y in &ys {
        for &x in &xs {
            pts.push(Vector2::new(x, y));
        }
    }
    Ok(PointGrid::from_rows(pts, discretization, discretization))
}
