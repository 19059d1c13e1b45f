use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// The fixed polyomino catalog. Layouts are gameplay-tuning data and must
/// stay exactly as listed; the names are stable identifiers hosts may key
/// sprites or sounds off.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Square2x2,
    LargeL,
    VLine4,
    HLine4,
    Tee,
    Zed,
    Ess,
    SmallL,
    Single,
    HPair,
    VPair,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 11] = [
        Self::Square2x2,
        Self::LargeL,
        Self::VLine4,
        Self::HLine4,
        Self::Tee,
        Self::Zed,
        Self::Ess,
        Self::SmallL,
        Self::Single,
        Self::HPair,
        Self::VPair,
    ];

    /// Stable catalog name.
    pub const fn name(self) -> &'static str {
        use ShapeKind::*;
        match self {
            Square2x2 => "square-2x2",
            LargeL => "L-shape",
            VLine4 => "line-1x4",
            HLine4 => "line-4x1",
            Tee => "T-shape",
            Zed => "Z-shape",
            Ess => "S-shape",
            SmallL => "L-mini",
            Single => "single",
            HPair => "two-block-horizontal",
            VPair => "two-block-vertical",
        }
    }

    /// Cell layout as textual rows, `#` marking an occupied cell. Rows must
    /// all be the same length.
    const fn pattern(self) -> &'static [&'static str] {
        use ShapeKind::*;
        match self {
            Square2x2 => &["##", "##"],
            LargeL => &["#.", "#.", "##"],
            VLine4 => &["#", "#", "#", "#"],
            HLine4 => &["####"],
            Tee => &["###", ".#."],
            Zed => &["##.", ".##"],
            Ess => &[".##", "##."],
            SmallL => &["#.", "##"],
            Single => &["#"],
            HPair => &["##"],
            VPair => &["#", "#"],
        }
    }
}

/// A materialized catalog shape: a rectangular occupancy matrix relative to
/// the shape's own top-left origin. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    kind: ShapeKind,
    cells: Array2<bool>,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        let pattern = kind.pattern();
        let rows = pattern.len();
        let cols = pattern[0].len();
        let mut cells: Array2<bool> = Array2::default((rows, cols));
        for (r, line) in pattern.iter().enumerate() {
            debug_assert_eq!(line.len(), cols, "catalog patterns must be rectangular");
            for (c, byte) in line.bytes().enumerate() {
                cells[(r, c)] = byte == b'#';
            }
        }
        Self { kind, cells }
    }

    /// Every catalog shape, in catalog order.
    pub fn full_catalog() -> Vec<Shape> {
        ShapeKind::ALL.iter().copied().map(Shape::new).collect()
    }

    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Extent as `(rows, cols)`.
    pub fn size(&self) -> Ix2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Ix {
        self.size().0
    }

    pub fn cols(&self) -> Ix {
        self.size().1
    }

    /// Occupied offsets relative to the shape origin, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = Ix2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &filled)| filled)
            .map(|((r, c), _)| (r as Ix, c as Ix))
    }

    pub fn cell_count(&self) -> Ax {
        self.cells.iter().filter(|&&filled| filled).count() as Ax
    }
}
