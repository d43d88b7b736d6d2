//! Overlap reduction: rotated lattice vs. pore extent.

use crate::error::{Error, Result};
use crate::grid::{Extent, PointGrid};

/// Number of lattice points inside the pore, boundary inclusive.
#[inline]
pub(super) fn inside_count(points: &PointGrid, pore: &Extent) -> usize {
    points.points().iter().filter(|p| pore.contains(**p)).count()
}

/// Percentage of lattice points whose coordinates lie within `pore`.
///
/// Point-exact AND of the x and y memberships, as a fraction of the total
/// point count, times 100. Range `[0, 100]`. Deterministic, no side effects.
/// Fails with `EmptyGrid` on a grid with zero points.
pub fn overlap_percentage(rotated: &PointGrid, pore: &Extent) -> Result<f64> {
    if rotated.is_empty() {
        return Err(Error::EmptyGrid);
    }
    let inside = inside_count(rotated, pore);
    Ok(100.0 * inside as f64 / rotated.len() as f64)
}
