//! Edge crossing interpolation and grid-to-world projection.

use serde::{Deserialize, Serialize};

use crate::cell::Edge;
use crate::types::Point;

/// Fractional position of `value` between `v1` (t = 0) and `v2` (t = 1).
///
/// Equal endpoints have no defined crossing and yield `f64::INFINITY`, which
/// then propagates into a non-finite output coordinate.
#[inline]
pub fn linear_interpolation(v1: f64, v2: f64, value: f64) -> f64 {
    if v1 == v2 {
        return f64::INFINITY;
    }
    (value - v1) / (v2 - v1)
}

/// Crossing fraction on each of the four edges of a cell.
///
/// Right and left edges are reflected (`1 - t`) so that the fraction can be
/// added directly to the cell's row index.
pub fn edge_fractions(corners: &[f64; 4], iso_value: f64) -> [f64; 4] {
    let mut fractions = [0.0; 4];
    for edge in Edge::ALL {
        let (from, to) = edge.corners();
        let t = linear_interpolation(corners[from], corners[to], iso_value);
        fractions[edge.index()] = if edge.runs_along_x() { t } else { 1.0 - t };
    }
    fractions
}

/// Affine mapping from grid indices to world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridTransform {
    /// World x of grid column 0.
    pub lng_start: f64,
    /// World y of grid row 0.
    pub lat_start: f64,
    /// Edge length of one cell in world units. Not validated.
    pub grid_size: f64,
}

impl Default for GridTransform {
    fn default() -> Self {
        Self {
            lng_start: 0.0,
            lat_start: 0.0,
            grid_size: 1.0,
        }
    }
}

impl GridTransform {
    pub fn new(lng_start: f64, lat_start: f64, grid_size: f64) -> Self {
        Self {
            lng_start,
            lat_start,
            grid_size,
        }
    }

    /// World position of the crossing on `edge` of cell `(col, row)` at
    /// fraction `t`.
    ///
    /// The fraction replaces the cell-local component along the edge; the
    /// other component comes from the edge's base offset.
    #[inline]
    pub fn project_crossing(&self, col: usize, row: usize, edge: Edge, t: f64) -> Point {
        let (base_x, base_y) = edge.base_offset();
        let (local_x, local_y) = if edge.runs_along_x() {
            (t, base_y)
        } else {
            (base_x, t)
        };

        Point::new(
            self.lng_start + (col as f64 + local_x) * self.grid_size,
            self.lat_start + (row as f64 + local_y) * self.grid_size,
        )
    }
}
