use rand::prelude::*;

use super::*;
use crate::error::GameError;

/// Generation strategy that samples each rack uniformly without replacement
/// from its catalog and tags every choice with an independently random
/// color. Seeded, so a fixed seed replays the same game.
#[derive(Clone, Debug)]
pub struct RandomChoiceGenerator {
    rng: SmallRng,
    catalog: Vec<Shape>,
    next_id: u64,
}

impl RandomChoiceGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(seed, Shape::full_catalog())
    }

    /// Restricted catalogs are used by reduced variants and tests.
    pub fn with_catalog(seed: u64, catalog: Vec<Shape>) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            catalog,
            next_id: 0,
        }
    }

    fn mint_id(&mut self) -> ChoiceId {
        let id = ChoiceId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl ChoiceGenerator for RandomChoiceGenerator {
    fn generate(&mut self, count: usize) -> Result<ChoiceRack> {
        if count > self.catalog.len() {
            log::warn!(
                "requested {} distinct choices but the catalog holds {}",
                count,
                self.catalog.len()
            );
            return Err(GameError::CatalogExhausted);
        }

        let picks = rand::seq::index::sample(&mut self.rng, self.catalog.len(), count);
        let mut rack = ChoiceRack::new();
        for pick in picks.iter() {
            let shape = self.catalog[pick].clone();
            let color = ColorTag(self.rng.gen_range(0..ColorTag::PALETTE_SIZE));
            let id = self.mint_id();
            rack.push(Choice { id, shape, color });
        }
        log::trace!("generated rack of {}", rack.len());
        Ok(rack)
    }
}
