//! Output geometry types.

use serde::{Deserialize, Serialize};

/// A point in world coordinates (longitude/latitude-like).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A line segment between two world-space crossing points.
///
/// Serializes as `[[x1, y1], [x2, y2]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Coordinates as `[[x1, y1], [x2, y2]]`.
    pub fn to_array(&self) -> [[f64; 2]; 2] {
        [self.start.into(), self.end.into()]
    }

    /// False when a degenerate edge pushed either endpoint to infinity.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl From<Segment> for [[f64; 2]; 2] {
    fn from(seg: Segment) -> Self {
        seg.to_array()
    }
}

impl From<[[f64; 2]; 2]> for Segment {
    fn from([start, end]: [[f64; 2]; 2]) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}
