//! Threshold level generation.

use crate::error::{IsolineError, IsolineResult};

/// Upper bound on the number of levels generated from one interval.
pub const MAX_LEVELS: usize = 10_000;

/// Generate contour levels automatically based on data range and interval.
///
/// Starts at the first multiple of `interval` at or above `min_value` and
/// steps up to `max_value` inclusive. Unusable inputs yield no levels; a range
/// that would need more than [`MAX_LEVELS`] levels is an error.
pub fn generate_contour_levels(
    min_value: f64,
    max_value: f64,
    interval: f64,
) -> IsolineResult<Vec<f64>> {
    let finite = interval.is_finite() && min_value.is_finite() && max_value.is_finite();
    if !finite || interval <= 0.0 || max_value <= min_value {
        return Ok(vec![]);
    }

    let first = (min_value / interval).ceil();
    let last = (max_value / interval).floor();
    if last < first {
        return Ok(vec![]);
    }

    // Count in f64: the quotient can exceed usize or overflow to infinity
    let count = last - first + 1.0;
    if count.is_nan() || count > MAX_LEVELS as f64 {
        return Err(IsolineError::invalid_option(
            "interval",
            format!(
                "{} over [{}, {}] gives {:.0} levels (limit {})",
                interval, min_value, max_value, count, MAX_LEVELS
            ),
        ));
    }

    // Multiply instead of accumulating so long runs don't drift
    Ok((0..count as usize)
        .map(|i| (first + i as f64) * interval)
        .collect())
}
