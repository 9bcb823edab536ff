//! Per-cell classification for marching squares.
//!
//! A cell's four corners are indexed 0..4 as bottom-left, bottom-right,
//! top-right, top-left. Edge `k` runs from corner `k` to corner `(k + 1) % 4`,
//! giving bottom, right, top, left.

/// One side of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Bottom = 0,
    Right = 1,
    Top = 2,
    Left = 3,
}

impl Edge {
    /// All edges in index order.
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Right, Edge::Top, Edge::Left];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Corner indices `(from, to)` joined by this edge.
    #[inline]
    pub fn corners(self) -> (usize, usize) {
        let k = self.index();
        (k, (k + 1) % 4)
    }

    /// Edge midpoint relative to the cell's top-left sample, in cell units.
    pub fn base_offset(self) -> (f64, f64) {
        match self {
            Edge::Bottom => (0.5, 1.0),
            Edge::Right => (1.0, 0.5),
            Edge::Top => (0.5, 0.0),
            Edge::Left => (0.0, 0.5),
        }
    }

    /// Bottom and top edges run along x; right and left run along y.
    #[inline]
    pub fn runs_along_x(self) -> bool {
        matches!(self, Edge::Bottom | Edge::Top)
    }
}

/// Edge pairs to connect inside one cell, in drawing order.
pub type LinePattern = &'static [(Edge, Edge)];

/// Cuts off corners 0 and 2 (bottom-left and top-right).
const WRAP_BL_TR: LinePattern = &[(Edge::Bottom, Edge::Left), (Edge::Right, Edge::Top)];

/// Cuts off corners 1 and 3 (bottom-right and top-left).
const WRAP_BR_TL: LinePattern = &[(Edge::Bottom, Edge::Right), (Edge::Top, Edge::Left)];

/// Default pattern for each corner code. Codes 5 and 10 are saddles and get
/// re-resolved by [`classify`].
pub const LINE_PATTERNS: [LinePattern; 16] = [
    &[],
    &[(Edge::Bottom, Edge::Left)],
    &[(Edge::Bottom, Edge::Right)],
    &[(Edge::Right, Edge::Left)],
    &[(Edge::Right, Edge::Top)],
    WRAP_BR_TL,
    &[(Edge::Bottom, Edge::Top)],
    &[(Edge::Top, Edge::Left)],
    &[(Edge::Top, Edge::Left)],
    &[(Edge::Bottom, Edge::Top)],
    WRAP_BL_TR,
    &[(Edge::Right, Edge::Top)],
    &[(Edge::Right, Edge::Left)],
    &[(Edge::Bottom, Edge::Right)],
    &[(Edge::Bottom, Edge::Left)],
    &[],
];

/// 4-bit corner classification. Bit `k` is set when corner `k` lies strictly
/// above the iso value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerCode(u8);

impl CornerCode {
    /// Classify corners against the threshold.
    #[inline]
    pub fn from_corners(corners: &[f64; 4], iso_value: f64) -> Self {
        let mut code = 0u8;
        for (k, &value) in corners.iter().enumerate() {
            if value > iso_value {
                code |= 1 << k;
            }
        }
        Self(code)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Diagonal corners agree while neighbours differ.
    #[inline]
    pub fn is_saddle(self) -> bool {
        self.0 == 5 || self.0 == 10
    }

    /// All corners on the same side of the threshold.
    #[inline]
    pub fn is_uniform(self) -> bool {
        self.0 == 0 || self.0 == 15
    }
}

/// Line pattern for a cell, resolving saddles by the mean of the corners.
pub fn classify(corners: &[f64; 4], iso_value: f64) -> LinePattern {
    let code = CornerCode::from_corners(corners, iso_value);
    if code.is_uniform() {
        &[]
    } else if code.is_saddle() {
        resolve_saddle(code, corners, iso_value)
    } else {
        LINE_PATTERNS[code.value() as usize]
    }
}

/// Pick the saddle topology from the cell mean, used as an estimate of the
/// value at the cell centre.
fn resolve_saddle(code: CornerCode, corners: &[f64; 4], iso_value: f64) -> LinePattern {
    let mean = corners.iter().sum::<f64>() / 4.0;
    let centre_high = mean >= iso_value;

    match (code.value(), centre_high) {
        (5, true) => WRAP_BL_TR,
        (5, false) => WRAP_BR_TL,
        (10, true) => WRAP_BR_TL,
        _ => WRAP_BL_TR,
    }
}
