//! Contouring options loaded from JSON.
//!
//! ```json
//! {
//!   "interval": 4.0,
//!   "min_value": 960.0,
//!   "lng_start": -130.0,
//!   "lat_start": 20.0,
//!   "grid_size": 0.25
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IsolineError, IsolineResult};
use crate::field::ScalarField;
use crate::interpolate::GridTransform;
use crate::levels::generate_contour_levels;

/// Which thresholds to contour and where the grid sits in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourOptions {
    /// Explicit thresholds. Takes precedence over `interval`.
    pub levels: Option<Vec<f64>>,
    /// Spacing between generated thresholds.
    pub interval: Option<f64>,
    /// Lower bound for generated thresholds (defaults to the field minimum).
    pub min_value: Option<f64>,
    /// Upper bound for generated thresholds (defaults to the field maximum).
    pub max_value: Option<f64>,
    pub lng_start: f64,
    pub lat_start: f64,
    pub grid_size: f64,
    /// Spread rows over the rayon pool.
    pub parallel: bool,
}

impl Default for ContourOptions {
    fn default() -> Self {
        let transform = GridTransform::default();
        Self {
            levels: None,
            interval: None,
            min_value: None,
            max_value: None,
            lng_start: transform.lng_start,
            lat_start: transform.lat_start,
            grid_size: transform.grid_size,
            parallel: false,
        }
    }
}

impl ContourOptions {
    /// Options with a single explicit threshold.
    pub fn single_level(level: f64) -> Self {
        Self {
            levels: Some(vec![level]),
            ..Self::default()
        }
    }

    pub fn from_json(json_str: &str) -> IsolineResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> IsolineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check that a level source exists and the interval is usable.
    pub fn validate(&self) -> IsolineResult<()> {
        match (&self.levels, self.interval) {
            (Some(_), _) => Ok(()),
            (None, Some(interval)) if interval.is_finite() && interval > 0.0 => Ok(()),
            (None, Some(interval)) => Err(IsolineError::invalid_option(
                "interval",
                format!("must be a positive number, got {}", interval),
            )),
            (None, None) => Err(IsolineError::invalid_option(
                "levels",
                "either 'levels' or 'interval' must be set",
            )),
        }
    }

    pub fn transform(&self) -> GridTransform {
        GridTransform::new(self.lng_start, self.lat_start, self.grid_size)
    }

    /// Thresholds to contour for `field`.
    ///
    /// Explicit levels are returned as given. Otherwise levels are generated
    /// from `interval` over `[min_value, max_value]`, falling back to the
    /// field's finite range for missing bounds. Fails when the interval is too
    /// fine for the range (see [`MAX_LEVELS`](crate::levels::MAX_LEVELS)).
    pub fn resolve_levels(&self, field: &ScalarField) -> IsolineResult<Vec<f64>> {
        if let Some(ref levels) = self.levels {
            return Ok(levels.clone());
        }

        let Some(interval) = self.interval else {
            return Ok(vec![]);
        };

        let range = field.min_max();
        let min = self.min_value.or(range.map(|(lo, _)| lo));
        let max = self.max_value.or(range.map(|(_, hi)| hi));

        match (min, max) {
            (Some(min), Some(max)) => generate_contour_levels(min, max, interval),
            _ => Ok(vec![]),
        }
    }
}
