use serde::{Deserialize, Serialize};

/// Opaque rendering hint carried by occupied cells. The engine only ever
/// stores and returns it; mapping the index to an actual color is the host's
/// business.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTag(pub u8);

impl ColorTag {
    /// How many distinct tags the generator hands out.
    pub const PALETTE_SIZE: u8 = 7;
}

/// Occupancy state of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Filled(ColorTag),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_filled(self) -> bool {
        !self.is_empty()
    }

    pub const fn color(self) -> Option<ColorTag> {
        match self {
            Self::Empty => None,
            Self::Filled(tag) => Some(tag),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
