//! Pure engine for a drag-and-drop block puzzle: an N×N board takes
//! polyomino placements, full rows and columns burst for points, and the
//! session ends when nothing on the rack fits anymore. No rendering, I/O,
//! or timers live here; hosts drive the engine and own everything visual.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use shapes::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod shapes;
mod types;

/// Per-session configuration. Observed variants play 8×8 or 10×10 boards
/// with a rack of three; both are plain parameters here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Ix,
    pub choice_count: u8,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Ix, choice_count: u8) -> Self {
        Self { size, choice_count }
    }

    pub fn new(size: Ix, choice_count: u8) -> Self {
        let size = size.clamp(1, Ix::MAX);
        let choice_count = choice_count.max(1);
        Self::new_unchecked(size, choice_count)
    }

    pub const fn total_cells(&self) -> Ax {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(8, 3)
    }
}
