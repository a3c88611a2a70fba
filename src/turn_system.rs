//! Energy-driven tick scheduler.
//!
//! Every call to [`World::step`] is one tick: a spawn attempt, then one pass
//! over the current level's entities in their stored order. Entities act
//! when they hold [`combat::ACTION_COST`] energy and gain their speed in
//! energy at the end of each tick they are processed.
//!
//! The pass walks slot indices rather than an iterator because entities are
//! removed and relocated while it runs. Removal tombstones a slot and
//! relocation rewrites it in place, so indices stay valid; the tombstones are
//! compacted once the pass completes.

use std::collections::HashSet;

use error::Result;
use rand::Rng;
use tracing::trace;

use crate::entity::EntityId;
use crate::systems::{self, SystemResult};
use crate::world::World;

/// How a tick ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Every entity on the level was processed
    Continued,
    /// The hero took the stairs; the rest of the old level's pass was skipped
    LevelChanged,
    HeroDied,
}

impl World {
    /// Advances the current level by one tick.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<StepOutcome> {
        if !self.is_hero_alive() {
            return Ok(StepOutcome::HeroDied);
        }

        systems::spawn_monster(self, rng)?;

        let mut processed: HashSet<EntityId> = HashSet::new();
        let mut index = 0;
        while index < self.current_level().entity_slots().len() {
            let Some(pos) = self.current_level().slot(index) else {
                index += 1;
                continue;
            };
            let Some(id) = self.current_level().entity_at(pos).map(|e| e.id) else {
                index += 1;
                continue;
            };
            index += 1;
            if !processed.insert(id) {
                continue;
            }

            if let SystemResult::Stop(outcome) = systems::update_entity(self, pos)? {
                trace!(?outcome, "tick ended early");
                return Ok(outcome);
            }
        }

        self.current_level_mut().compact_entities();
        Ok(StepOutcome::Continued)
    }
}
