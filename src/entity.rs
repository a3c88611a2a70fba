// src/entity.rs

use combat::{Combatant, Monster, Stats};
use hero::Hero;
use serde::{Deserialize, Serialize};

/// Identity of an entity for the lifetime of a world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    Hero(Box<Hero>),
    Monster(Monster),
}

/// Anything that occupies a tile and takes turns.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
}

impl Entity {
    pub fn hero(id: EntityId, hero: Hero) -> Self {
        Self {
            id,
            kind: EntityKind::Hero(Box::new(hero)),
        }
    }

    pub fn monster(id: EntityId, monster: Monster) -> Self {
        Self {
            id,
            kind: EntityKind::Monster(monster),
        }
    }

    pub fn is_hero(&self) -> bool {
        matches!(self.kind, EntityKind::Hero(_))
    }

    pub fn as_hero(&self) -> Option<&Hero> {
        match &self.kind {
            EntityKind::Hero(hero) => Some(hero),
            EntityKind::Monster(_) => None,
        }
    }

    pub fn as_hero_mut(&mut self) -> Option<&mut Hero> {
        match &mut self.kind {
            EntityKind::Hero(hero) => Some(hero),
            EntityKind::Monster(_) => None,
        }
    }

    pub fn as_monster(&self) -> Option<&Monster> {
        match &self.kind {
            EntityKind::Monster(monster) => Some(monster),
            EntityKind::Hero(_) => None,
        }
    }

    /// Whether this entity may open closed doors on its way.
    pub fn opens_doors(&self) -> bool {
        match &self.kind {
            EntityKind::Hero(_) => true,
            EntityKind::Monster(monster) => monster.open_doors,
        }
    }
}

impl Combatant for Entity {
    fn stats(&self) -> &Stats {
        match &self.kind {
            EntityKind::Hero(hero) => hero.stats(),
            EntityKind::Monster(monster) => monster.stats(),
        }
    }

    fn stats_mut(&mut self) -> &mut Stats {
        match &mut self.kind {
            EntityKind::Hero(hero) => hero.stats_mut(),
            EntityKind::Monster(monster) => monster.stats_mut(),
        }
    }
}
