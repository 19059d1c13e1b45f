use std::collections::BTreeSet;

/// Linear dimension, used for a single board axis or coordinate.
pub type Ix = u8;

/// Area dimension, used for cell counts and per-move points.
pub type Ax = u16;

/// Shorthand for a `(row, col)` position or a `(rows, cols)` extent.
pub type Ix2 = (Ix, Ix);

/// Ordered set of board positions. Ordered so that clear reports come out
/// row-major and deterministic.
pub type CellSet = BTreeSet<Ix2>;

pub trait NdConvert {
    type Output;
    fn convert(self) -> Self::Output;
}

impl NdConvert for Ix2 {
    type Output = [usize; 2];
    fn convert(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Ix, b: Ix) -> Ax {
    let a = a as Ax;
    let b = b as Ax;
    a.saturating_mul(b)
}
