//! Synthetic scalar fields for contouring tests.
//!
//! All generators return a `Vec<f64>` in row-major order (row 0 first) so the
//! result can be handed straight to `ScalarField::new(data, width, height)`.

/// Field that increases linearly with the column index: `value = col * step`.
pub fn create_gradient_field(width: usize, height: usize, step: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push(col as f64 * step);
        }
    }
    data
}

/// Cone-shaped field with `peak` at the grid centre falling off by 1 per cell.
pub fn create_peak_field(width: usize, height: usize, peak: f64) -> Vec<f64> {
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;

    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            data.push(peak - (dx * dx + dy * dy).sqrt());
        }
    }
    data
}

/// Alternating `low`/`high` samples; every interior cell is a saddle.
pub fn create_checkerboard_field(width: usize, height: usize, low: f64, high: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(if (row + col) % 2 == 0 { low } else { high });
        }
    }
    data
}

/// Creates a grid filled with a constant value.
pub fn create_constant_field(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Smooth field of overlapping sine waves, roughly in `[0, 100]`.
pub fn create_smooth_field(width: usize, height: usize) -> Vec<f64> {
    use std::f64::consts::PI;

    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let fx = col as f64 / width.max(1) as f64;
            let fy = row as f64 / height.max(1) as f64;

            let v1 = (fx * PI * 4.0).sin() * 20.0;
            let v2 = (fy * PI * 4.0).sin() * 20.0;
            let v3 = ((fx + fy) * PI * 2.0).sin() * 10.0;

            data.push(50.0 + v1 + v2 + v3);
        }
    }
    data
}

/// Split a row-major buffer into nested rows.
pub fn to_rows(data: &[f64], width: usize) -> Vec<Vec<f64>> {
    data.chunks(width.max(1)).map(|row| row.to_vec()).collect()
}
