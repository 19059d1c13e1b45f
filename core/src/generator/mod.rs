use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cell::ColorTag;
use crate::error::Result;
use crate::shapes::Shape;

pub use random::*;

mod random;

/// Identifier minted for each generated choice. Unique for the lifetime of
/// the generator that minted it, so a consumed id can never alias a live one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChoiceId(pub u64);

/// One selectable block on offer this round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub shape: Shape,
    pub color: ColorTag,
}

/// The per-round rack of selectable choices. Observed rack size is 3, so the
/// inline capacity covers the common case without spilling.
pub type ChoiceRack = SmallVec<[Choice; 4]>;

/// Source of fresh choice racks. Implementations own whatever randomness
/// they need; every `generate` call is independent of earlier ones (plain
/// re-sample, no cross-call no-repeat guarantee).
pub trait ChoiceGenerator {
    fn generate(&mut self, count: usize) -> Result<ChoiceRack>;
}
