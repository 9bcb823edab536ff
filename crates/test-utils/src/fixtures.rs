//! Common test fixtures for contouring tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Small hand-checked grids.
pub mod grids {
    /// One cell, bottom-right corner high.
    pub const SINGLE_HIGH_CORNER: [[f64; 2]; 2] = [[1.0, 1.0], [1.0, 10.0]];

    /// One cell, right column high (vertical crossing through both rows).
    pub const RIGHT_COLUMN_HIGH: [[f64; 2]; 2] = [[0.0, 10.0], [0.0, 10.0]];

    /// One saddle cell with bottom-left and top-right high; mean 3.
    pub const SADDLE: [[f64; 2]; 2] = [[1.0, 5.0], [5.0, 1.0]];
}

/// Option documents in the JSON format read by `ContourOptions::from_json`.
pub mod options {
    /// Explicit levels over a grid anchored at (-130, 20).
    pub const EXPLICIT_LEVELS: &str = r#"{
        "levels": [5.0, 7.0, 9.0],
        "lng_start": -130.0,
        "lat_start": 20.0,
        "grid_size": 0.25
    }"#;

    /// Interval-generated levels using the field range.
    pub const INTERVAL: &str = r#"{
        "interval": 2.0,
        "parallel": true
    }"#;

    /// Rejected by validation.
    pub const NEGATIVE_INTERVAL: &str = r#"{ "interval": -4.0 }"#;
}

/// Write `contents` to a temporary file that is deleted on drop.
pub fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
