// src/combat/src/monster.rs

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::combatant::{Combatant, Stats};

/// Monster species, roughly ordered from weakest to strongest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum MonsterKind {
    Rat,
    Goblin,
    Jackal,
    Kobold,
    Orc,
    #[strum(serialize = "Giant spider")]
    GiantSpider,
    Hobgoblin,
    Gnoll,
    Troll,
    Wraith,
    Ogre,
    Minotaur,
    Golem,
    Dragon,
}

/// Number of depth tiers in the species table.
pub const DEPTH_TIERS: usize = 10;

/// Species that may spawn at each depth. Deeper tiers draw from stronger pools.
const SPECIES_BY_DEPTH: [&[MonsterKind]; DEPTH_TIERS] = {
    use MonsterKind::*;
    [
        &[Rat, Goblin, Jackal],
        &[Goblin, Jackal, Kobold],
        &[Jackal, Kobold, Orc],
        &[Kobold, Orc, GiantSpider],
        &[Orc, GiantSpider, Hobgoblin],
        &[GiantSpider, Hobgoblin, Gnoll],
        &[Hobgoblin, Gnoll, Troll, Wraith],
        &[Gnoll, Troll, Wraith, Ogre],
        &[Troll, Wraith, Ogre, Minotaur],
        &[Ogre, Minotaur, Golem, Dragon],
    ]
};

/// The species pool for `depth`; depths past the table use the last tier.
pub fn species_by_depth(depth: usize) -> &'static [MonsterKind] {
    SPECIES_BY_DEPTH[depth.min(DEPTH_TIERS - 1)]
}

/// Picks a species uniformly from the pool for `depth`.
pub fn random_species<R: Rng>(depth: usize, rng: &mut R) -> MonsterKind {
    species_by_depth(depth)
        .choose(rng)
        .copied()
        .unwrap_or(MonsterKind::Rat)
}

/// A hostile actor that hunts the hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub stats: Stats,
    /// Whether this monster can open closed doors in its way
    pub open_doors: bool,
}

impl Monster {
    /// Creates a monster with the base stats of its species.
    pub fn new(kind: MonsterKind) -> Self {
        // (hit points, defence, speed, strength, opens doors)
        let (hp, defence, speed, strength, open_doors) = match kind {
            MonsterKind::Rat => (2, 0, 60, 1, false),
            MonsterKind::Goblin => (3, 0, 50, 2, true),
            MonsterKind::Jackal => (3, 0, 90, 2, false),
            MonsterKind::Kobold => (4, 1, 50, 3, true),
            MonsterKind::Orc => (6, 1, 50, 4, true),
            MonsterKind::GiantSpider => (5, 2, 80, 4, false),
            MonsterKind::Hobgoblin => (8, 2, 55, 5, true),
            MonsterKind::Gnoll => (10, 3, 60, 6, true),
            MonsterKind::Troll => (16, 3, 45, 8, false),
            MonsterKind::Wraith => (12, 5, 70, 8, true),
            MonsterKind::Ogre => (22, 4, 40, 10, true),
            MonsterKind::Minotaur => (26, 6, 65, 11, true),
            MonsterKind::Golem => (35, 9, 30, 12, false),
            MonsterKind::Dragon => (45, 10, 60, 15, false),
        };

        Self {
            kind,
            stats: Stats::new(kind.to_string(), hp, defence, speed, strength),
            open_doors,
        }
    }

    /// Builds a monster from an explicit stat block.
    pub fn with_stats(kind: MonsterKind, stats: Stats, open_doors: bool) -> Self {
        Self {
            kind,
            stats,
            open_doors,
        }
    }
}

impl Combatant for Monster {
    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_monster_creation() {
        let goblin = Monster::new(MonsterKind::Goblin);
        assert_eq!(goblin.stats.name, "Goblin");
        assert_eq!(goblin.stats.hit_points, 3);
        assert_eq!(goblin.stats.max_hit_points, 3);
        assert_eq!(goblin.stats.energy, 0);
        assert!(goblin.open_doors);

        let spider = Monster::new(MonsterKind::GiantSpider);
        assert_eq!(spider.name(), "Giant spider");
        assert!(!spider.open_doors);
    }

    #[test]
    fn test_every_species_spawns_somewhere() {
        for kind in MonsterKind::iter() {
            assert!(
                (0..DEPTH_TIERS).any(|d| species_by_depth(d).contains(&kind)),
                "{kind} never spawns"
            );
        }
    }

    #[test]
    fn test_depth_clamps_to_last_tier() {
        assert_eq!(species_by_depth(9), species_by_depth(42));
        assert!(species_by_depth(9).contains(&MonsterKind::Dragon));
        assert!(!species_by_depth(0).contains(&MonsterKind::Dragon));
    }

    #[test]
    fn test_random_species_stays_in_pool() {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg64::seed_from_u64(17);
        for depth in [0, 4, 9, 30] {
            for _ in 0..50 {
                assert!(species_by_depth(depth).contains(&random_species(depth, &mut rng)));
            }
        }
    }

    #[test]
    fn test_deeper_tiers_are_stronger() {
        let average_hp = |depth: usize| {
            let pool = species_by_depth(depth);
            pool.iter()
                .map(|&k| Monster::new(k).stats.hit_points)
                .sum::<i32>() as f32
                / pool.len() as f32
        };
        for depth in 1..DEPTH_TIERS {
            assert!(average_hp(depth) > average_hp(depth - 1), "tier {depth}");
        }
    }
}
