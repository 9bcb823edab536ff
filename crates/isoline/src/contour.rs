//! Isoline extraction using the marching squares algorithm.
//!
//! Every cell is handled on its own: classify the corners, look up the line
//! pattern, then place each pattern endpoint on its edge by linear
//! interpolation and map it to world coordinates. The result is a flat list of
//! unconnected segments.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

use crate::cell::classify;
use crate::error::IsolineResult;
use crate::field::ScalarField;
use crate::interpolate::{edge_fractions, GridTransform};
use crate::options::ContourOptions;
use crate::types::Segment;

/// Segments extracted for a single threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Isoline {
    pub level: f64,
    pub segments: Vec<Segment>,
}

/// Compute isoline segments from nested rows of samples.
///
/// This is the plain entry point: `discrete_data[row][col]`, threshold, world
/// origin of sample `(0, 0)` and cell size. Grids with fewer than two rows or
/// columns yield no segments. Fails only when rows have differing lengths.
pub fn isolines<R: AsRef<[f64]>>(
    discrete_data: &[R],
    iso_value: f64,
    lng_start: f64,
    lat_start: f64,
    grid_size: f64,
) -> IsolineResult<Vec<Segment>> {
    let field = ScalarField::from_rows(discrete_data)?;
    let transform = GridTransform::new(lng_start, lat_start, grid_size);
    Ok(march_squares(&field, iso_value, &transform))
}

/// Marching squares over every cell of `field`, row by row.
pub fn march_squares(
    field: &ScalarField,
    iso_value: f64,
    transform: &GridTransform,
) -> Vec<Segment> {
    if field.columns() < 2 || field.rows() < 2 {
        return vec![];
    }

    let mut segments = Vec::new();
    for row in 0..field.rows() - 1 {
        march_row(field, row, iso_value, transform, &mut segments);
    }

    debug!(
        columns = field.columns(),
        rows = field.rows(),
        iso_value,
        num_segments = segments.len(),
        "march_squares complete"
    );

    segments
}

/// Same output as [`march_squares`], with rows spread across the rayon pool.
///
/// Each row fills its own buffer; buffers are joined in row order.
pub fn march_squares_parallel(
    field: &ScalarField,
    iso_value: f64,
    transform: &GridTransform,
) -> Vec<Segment> {
    if field.columns() < 2 || field.rows() < 2 {
        return vec![];
    }

    let per_row: Vec<Vec<Segment>> = (0..field.rows() - 1)
        .into_par_iter()
        .map(|row| {
            let mut local = Vec::new();
            march_row(field, row, iso_value, transform, &mut local);
            local
        })
        .collect();

    let segments = per_row.concat();

    debug!(
        columns = field.columns(),
        rows = field.rows(),
        iso_value,
        num_segments = segments.len(),
        threads = rayon::current_num_threads(),
        "march_squares_parallel complete"
    );

    segments
}

/// Process the cells whose top edge lies on grid row `row`.
fn march_row(
    field: &ScalarField,
    row: usize,
    iso_value: f64,
    transform: &GridTransform,
    out: &mut Vec<Segment>,
) {
    for col in 0..field.columns() - 1 {
        let corners = field.cell_corners(col, row);
        let pattern = classify(&corners, iso_value);
        if pattern.is_empty() {
            continue;
        }

        let fractions = edge_fractions(&corners, iso_value);
        for &(from, to) in pattern {
            out.push(Segment::new(
                transform.project_crossing(col, row, from, fractions[from.index()]),
                transform.project_crossing(col, row, to, fractions[to.index()]),
            ));
        }
    }
}

/// Extract one [`Isoline`] per level.
pub fn isolines_for_levels(
    field: &ScalarField,
    levels: &[f64],
    transform: &GridTransform,
) -> Vec<Isoline> {
    levels
        .iter()
        .map(|&level| {
            let segments = march_squares(field, level, transform);
            trace!(level, num_segments = segments.len(), "level extracted");
            Isoline { level, segments }
        })
        .collect()
}

/// Extract isolines for every level described by `options`.
///
/// Levels come from [`ContourOptions::resolve_levels`]; the parallel walker is
/// used when `options.parallel` is set. An interval too fine for the value
/// range is reported as [`IsolineError::InvalidOption`](crate::IsolineError).
pub fn generate_isolines(
    field: &ScalarField,
    options: &ContourOptions,
) -> IsolineResult<Vec<Isoline>> {
    options.validate()?;

    let levels = options.resolve_levels(field)?;
    let transform = options.transform();

    debug!(
        columns = field.columns(),
        rows = field.rows(),
        num_levels = levels.len(),
        first_level = levels.first().copied().unwrap_or(0.0),
        last_level = levels.last().copied().unwrap_or(0.0),
        parallel = options.parallel,
        "generate_isolines input"
    );

    let isolines: Vec<Isoline> = if options.parallel {
        levels
            .iter()
            .map(|&level| Isoline {
                level,
                segments: march_squares_parallel(field, level, &transform),
            })
            .collect()
    } else {
        isolines_for_levels(field, &levels, &transform)
    };

    debug!(
        num_isolines = isolines.len(),
        total_segments = isolines.iter().map(|i| i.segments.len()).sum::<usize>(),
        "Generated isolines"
    );

    Ok(isolines)
}
