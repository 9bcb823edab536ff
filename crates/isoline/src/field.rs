//! Scalar field sampled on a regular grid.

use crate::error::{IsolineError, IsolineResult};

/// A rectangular grid of samples stored in row-major order.
///
/// Row 0 is the first row of the input. A cell's "bottom" corners are the ones
/// with the larger row index.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    data: Vec<f64>,
    columns: usize,
    rows: usize,
}

impl ScalarField {
    /// Wrap a flat row-major sample buffer.
    pub fn new(data: Vec<f64>, columns: usize, rows: usize) -> IsolineResult<Self> {
        let expected = columns * rows;
        if data.len() != expected {
            return Err(IsolineError::dimension_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            columns,
            rows,
        })
    }

    /// Build a field from nested rows, e.g. a parsed `[[...], [...]]` array.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> IsolineResult<Self> {
        let columns = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(columns * rows.len());

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != columns {
                return Err(IsolineError::RaggedRow {
                    row,
                    expected: columns,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            data,
            columns,
            rows: rows.len(),
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Sample at `(col, row)`.
    #[inline]
    pub fn value(&self, col: usize, row: usize) -> f64 {
        self.data[row * self.columns + col]
    }

    /// Number of complete cells; zero when either dimension is below 2.
    pub fn cell_count(&self) -> usize {
        self.columns.saturating_sub(1) * self.rows.saturating_sub(1)
    }

    /// Corner samples of the cell whose top-left sample is `(col, row)`.
    ///
    /// Order: bottom-left, bottom-right, top-right, top-left. Edge and pattern
    /// indices elsewhere in the crate are defined against this order.
    #[inline]
    pub fn cell_corners(&self, col: usize, row: usize) -> [f64; 4] {
        [
            self.value(col, row + 1),
            self.value(col + 1, row + 1),
            self.value(col + 1, row),
            self.value(col, row),
        ]
    }

    /// Minimum and maximum of the finite samples, if any.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
