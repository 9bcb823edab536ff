//! Isoline (contour line) extraction for scalar fields on regular grids.
//!
//! Implements marching squares:
//! - Corner classification against a threshold with saddle disambiguation
//! - Linear interpolation of edge crossings
//! - Affine projection of crossings into world coordinates
//!
//! Output is a flat list of unconnected [`Segment`]s.

pub mod cell;
pub mod contour;
pub mod error;
pub mod field;
pub mod interpolate;
pub mod levels;
pub mod options;
pub mod types;

pub use cell::{classify, CornerCode, Edge, LinePattern, LINE_PATTERNS};
pub use contour::{
    generate_isolines, isolines, isolines_for_levels, march_squares, march_squares_parallel,
    Isoline,
};
pub use error::{IsolineError, IsolineResult};
pub use field::ScalarField;
pub use interpolate::{edge_fractions, linear_interpolation, GridTransform};
pub use levels::{generate_contour_levels, MAX_LEVELS};
pub use options::ContourOptions;
pub use types::{Point, Segment};
