//! Tests for marching squares isoline extraction.

use isoline::{
    generate_isolines, isolines, isolines_for_levels, linear_interpolation, march_squares,
    march_squares_parallel, ContourOptions, GridTransform, ScalarField, Segment,
};
use test_utils::{
    assert_approx_eq, assert_coords_approx_eq, create_checkerboard_field, create_constant_field,
    create_gradient_field, create_peak_field, create_smooth_field, grids, to_rows,
};

fn field(data: Vec<f64>, width: usize, height: usize) -> ScalarField {
    ScalarField::new(data, width, height).unwrap()
}

fn unit() -> GridTransform {
    GridTransform::default()
}

// ============================================================================
// linear_interpolation tests
// ============================================================================

#[test]
fn test_linear_interpolation_sanity() {
    let (v1, v2) = (-3.0, 7.0);
    assert_eq!(linear_interpolation(v1, v2, v1), 0.0);
    assert_eq!(linear_interpolation(v1, v2, v2), 1.0);
    assert_eq!(linear_interpolation(v1, v2, (v1 + v2) / 2.0), 0.5);
}

#[test]
fn test_linear_interpolation_equal_endpoints_is_infinite() {
    for value in [-1.0, 0.0, 4.0, 1e9] {
        assert_eq!(linear_interpolation(4.0, 4.0, value), f64::INFINITY);
    }
}

// ============================================================================
// Grid boundary tests
// ============================================================================

#[test]
fn test_grids_without_cells_are_empty() {
    let empty: [[f64; 0]; 0] = [];
    assert!(isolines(&empty, 0.5, 0.0, 0.0, 1.0).unwrap().is_empty());
    assert!(isolines(&[[1.0]], 0.5, 0.0, 0.0, 1.0).unwrap().is_empty());
    assert!(isolines(&[[0.0, 1.0, 0.0, 1.0]], 0.5, 0.0, 0.0, 1.0)
        .unwrap()
        .is_empty());
    assert!(isolines(&[[0.0], [1.0], [0.0]], 0.5, 0.0, 0.0, 1.0)
        .unwrap()
        .is_empty());
}

#[test]
fn test_ragged_rows_rejected() {
    let rows = vec![vec![0.0, 1.0], vec![1.0]];
    assert!(isolines(&rows, 0.5, 0.0, 0.0, 1.0).is_err());
}

// ============================================================================
// Emptiness tests
// ============================================================================

#[test]
fn test_threshold_outside_range_is_empty() {
    let data = create_smooth_field(16, 12);
    let (min, max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let f = field(data, 16, 12);

    assert!(march_squares(&f, max + 0.001, &unit()).is_empty());
    assert!(march_squares(&f, min - 0.001, &unit()).is_empty());
}

#[test]
fn test_flat_field_at_level_is_empty() {
    // Equal to the threshold is "not above", so every cell is code 0
    let f = field(create_constant_field(4, 4, 5.0), 4, 4);
    assert!(march_squares(&f, 5.0, &unit()).is_empty());
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_single_high_corner_scenario() {
    let segments = isolines(&grids::SINGLE_HIGH_CORNER, 5.0, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(segments.len(), 1);

    let t = 4.0 / 9.0;
    let seg = segments[0];
    // Bottom edge, measured from the bottom-left corner
    assert_coords_approx_eq!((seg.start.x, seg.start.y), (t, 1.0), 1e-12);
    // Right edge
    assert_coords_approx_eq!((seg.end.x, seg.end.y), (1.0, t), 1e-12);
}

#[test]
fn test_interpolation_midpoints() {
    // BL=0, BR=10, TR=10, TL=0
    let segments = isolines(&grids::RIGHT_COLUMN_HIGH, 5.0, 10.0, 20.0, 2.0).unwrap();
    assert_eq!(segments.len(), 1);

    let seg = segments[0];
    assert_coords_approx_eq!((seg.start.x, seg.start.y), (11.0, 22.0), 1e-12);
    assert_coords_approx_eq!((seg.end.x, seg.end.y), (11.0, 20.0), 1e-12);
}

#[test]
fn test_bottom_row_high_connects_right_and_left() {
    // Top low, bottom high: code 3
    let segments = isolines(&[[0.0, 0.0], [10.0, 10.0]], 5.0, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(segments.len(), 1);

    let seg = segments[0];
    assert_coords_approx_eq!((seg.start.x, seg.start.y), (1.0, 0.5), 1e-12);
    assert_coords_approx_eq!((seg.end.x, seg.end.y), (0.0, 0.5), 1e-12);
}

#[test]
fn test_vertical_edge_fractions_are_reflected() {
    // Right edge runs bottom-right -> top-right, left edge top-left -> bottom-left;
    // both store 1 - t, so the crossing lands at row + (1 - t).
    let segments = isolines(&[[0.0, 0.0], [10.0, 10.0]], 2.5, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(segments.len(), 1);

    let seg = segments[0];
    assert_coords_approx_eq!((seg.start.x, seg.start.y), (1.0, 0.25), 1e-12);
    assert_coords_approx_eq!((seg.end.x, seg.end.y), (0.0, 0.75), 1e-12);
}

#[test]
fn test_nan_samples_are_not_skipped() {
    // TL is NaN; TR is the only corner above the threshold
    let rows = [[f64::NAN, 10.0], [0.0, 0.0]];
    let segments = isolines(&rows, 5.0, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(segments.len(), 1);
    assert!(!segments[0].is_finite());
}

// ============================================================================
// Saddle tests
// ============================================================================

#[test]
fn test_saddle_code_5_mean_above_threshold() {
    // corners BL=5, BR=1, TR=5, TL=1; mean 3
    let segments = isolines(&grids::SADDLE, 2.0, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(segments.len(), 2);

    // (bottom, left)
    assert_eq!(segments[0].start.y, 1.0);
    assert_eq!(segments[0].end.x, 0.0);
    // (right, top)
    assert_eq!(segments[1].start.x, 1.0);
    assert_eq!(segments[1].end.y, 0.0);
}

#[test]
fn test_saddle_code_5_mean_below_threshold() {
    let segments = isolines(&grids::SADDLE, 4.0, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(segments.len(), 2);

    // (bottom, right)
    assert_eq!(segments[0].start.y, 1.0);
    assert_eq!(segments[0].end.x, 1.0);
    // (top, left)
    assert_eq!(segments[1].start.y, 0.0);
    assert_eq!(segments[1].end.x, 0.0);
}

#[test]
fn test_saddle_code_10_branches() {
    // corners BL=1, BR=5, TR=1, TL=5; mean 3
    let rows = [[5.0, 1.0], [1.0, 5.0]];

    let high = isolines(&rows, 2.0, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(high.len(), 2);
    assert_eq!(high[0].end.x, 1.0); // (bottom, right)
    assert_eq!(high[1].end.x, 0.0); // (top, left)

    let low = isolines(&rows, 4.0, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(low.len(), 2);
    assert_eq!(low[0].end.x, 0.0); // (bottom, left)
    assert_eq!(low[1].end.y, 0.0); // (right, top)
}

#[test]
fn test_checkerboard_every_cell_is_saddle() {
    let f = field(create_checkerboard_field(5, 4, 0.0, 1.0), 5, 4);
    let segments = march_squares(&f, 0.5, &unit());
    assert_eq!(segments.len(), 2 * f.cell_count());
}

// ============================================================================
// Invariance and equivariance tests
// ============================================================================

#[test]
fn test_uniform_shift_invariance() {
    let data = create_peak_field(7, 6, 10.0);
    let shifted: Vec<f64> = data.iter().map(|v| v + 250.0).collect();

    let base = march_squares(&field(data, 7, 6), 7.5, &unit());
    let moved = march_squares(&field(shifted, 7, 6), 257.5, &unit());

    assert!(!base.is_empty());
    assert_eq!(base.len(), moved.len());
    for (a, b) in base.iter().zip(&moved) {
        assert_coords_approx_eq!((a.start.x, a.start.y), (b.start.x, b.start.y), 1e-9);
        assert_coords_approx_eq!((a.end.x, a.end.y), (b.end.x, b.end.y), 1e-9);
    }
}

#[test]
fn test_scale_and_translate_equivariance() {
    let f = field(create_smooth_field(20, 15), 20, 15);
    let (dx, dy, s) = (-120.0, 35.0, 0.125);

    let base = march_squares(&f, 50.0, &unit());
    let mapped = march_squares(&f, 50.0, &GridTransform::new(dx, dy, s));

    assert!(!base.is_empty());
    assert_eq!(base.len(), mapped.len());
    let expect = |x: f64, y: f64| (dx + x * s, dy + y * s);
    for (a, b) in base.iter().zip(&mapped) {
        let (sx, sy) = expect(a.start.x, a.start.y);
        let (ex, ey) = expect(a.end.x, a.end.y);
        assert_coords_approx_eq!((sx, sy), (b.start.x, b.start.y), 1e-9);
        assert_coords_approx_eq!((ex, ey), (b.end.x, b.end.y), 1e-9);
    }
}

#[test]
fn test_zero_grid_size_collapses_to_origin() {
    let segments = isolines(&grids::SINGLE_HIGH_CORNER, 5.0, 3.0, -4.0, 0.0).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start.x, 3.0);
    assert_eq!(segments[0].end.y, -4.0);
}

// ============================================================================
// Larger grids
// ============================================================================

#[test]
fn test_peak_field_surrounds_peak() {
    let f = field(create_peak_field(9, 9, 10.0), 9, 9);
    let segments = march_squares(&f, 7.0, &unit());

    assert!(segments.len() >= 8);
    for seg in &segments {
        for p in [seg.start, seg.end] {
            let r = ((p.x - 4.0).powi(2) + (p.y - 4.0).powi(2)).sqrt();
            assert!(r > 1.5 && r < 4.0, "point {:?} at radius {}", p, r);
        }
    }
}

#[test]
fn test_gradient_field_one_segment_per_row() {
    let width = 20;
    let height = 12;
    let f = field(create_gradient_field(width, height, 1.0), width, height);
    let segments = march_squares(&f, 9.5, &unit());

    assert_eq!(segments.len(), height - 1);
    for seg in &segments {
        assert_approx_eq!(seg.start.x, 9.5, 1e-12);
        assert_approx_eq!(seg.end.x, 9.5, 1e-12);
    }
}

#[test]
fn test_parallel_matches_sequential_on_smooth_field() {
    let f = field(create_smooth_field(64, 48), 64, 48);
    let transform = GridTransform::new(-100.0, 30.0, 0.1);

    for level in [30.0, 50.0, 70.0] {
        let sequential = march_squares(&f, level, &transform);
        let parallel = march_squares_parallel(&f, level, &transform);
        assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_nested_rows_match_flat_field() {
    let data = create_smooth_field(10, 8);
    let rows = to_rows(&data, 10);

    let from_rows = isolines(&rows, 55.0, 0.0, 0.0, 1.0).unwrap();
    let from_flat = march_squares(&field(data, 10, 8), 55.0, &unit());
    assert_eq!(from_rows, from_flat);
}

// ============================================================================
// Multi-level tests
// ============================================================================

#[test]
fn test_isolines_for_levels_matches_single_level_runs() {
    let f = field(create_peak_field(8, 8, 6.0), 8, 8);
    let levels = [1.0, 3.0, 5.0];
    let all = isolines_for_levels(&f, &levels, &unit());

    assert_eq!(all.len(), levels.len());
    for (isoline, &level) in all.iter().zip(&levels) {
        assert_eq!(isoline.level, level);
        assert_eq!(isoline.segments, march_squares(&f, level, &unit()));
    }
}

#[test]
fn test_generate_isolines_from_interval() {
    let f = field(create_gradient_field(6, 3, 2.0), 6, 3);
    let options = ContourOptions {
        interval: Some(4.0),
        parallel: true,
        ..ContourOptions::default()
    };

    let isolines = generate_isolines(&f, &options).unwrap();
    let levels: Vec<f64> = isolines.iter().map(|i| i.level).collect();
    assert_eq!(levels, vec![0.0, 4.0, 8.0]);

    // level 0 equals the minimum: samples at 0 are "not above", so the line sits on column 0
    assert_eq!(isolines[0].segments.len(), 2);
    assert_approx_eq!(isolines[0].segments[0].start.x, 0.0, 1e-12);
    assert_eq!(isolines[1].segments.len(), 2);
    assert_approx_eq!(isolines[1].segments[0].start.x, 2.0, 1e-12);
}

#[test]
fn test_generate_isolines_requires_levels() {
    let f = field(create_constant_field(2, 2, 0.0), 2, 2);
    assert!(generate_isolines(&f, &ContourOptions::default()).is_err());
}

// ============================================================================
// Output format
// ============================================================================

#[test]
fn test_segments_serialize_as_coordinate_pairs() {
    let segments = isolines(&grids::RIGHT_COLUMN_HIGH, 5.0, 0.0, 0.0, 1.0).unwrap();
    let json = serde_json::to_value(&segments).unwrap();
    assert_eq!(json, serde_json::json!([[[0.5, 1.0], [0.5, 0.0]]]));

    let parsed: Vec<Segment> = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, segments);
}
