// src/world.rs
//! The dungeon together with the entities living in it.

use combat::{Combatant, Monster};
use dungeon::{Dungeon, Level, LevelGenerator, Point, TileType};
use error::{GameError, Result};
use hero::{Hero, HeroStatus, plan_actions};
use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::entity::{Entity, EntityId};

/// Which way a stair transition goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stairway {
    Up,
    Down,
}

/// One running game: every level, the cursor on the current one and the
/// hero's whereabouts.
#[derive(Clone, Debug)]
pub struct World {
    pub(crate) dungeon: Dungeon<Entity>,
    pub(crate) hero_pos: Point,
    pub(crate) config: GameConfig,
    next_id: u64,
}

/// Builds a world of `level_count` levels with the hero at the centre of the
/// top one, using default spawn settings.
pub fn make_world<R: Rng>(
    level_count: usize,
    level_length: i32,
    hero: Hero,
    rng: &mut R,
) -> Result<World> {
    let config = GameConfig {
        levels: level_count,
        level_length,
        ..GameConfig::default()
    };
    World::from_config(&config, hero, rng)
}

impl World {
    pub fn from_config<R: Rng>(config: &GameConfig, hero: Hero, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let generator = LevelGenerator::new(config.reject_limit);
        let dungeon = Dungeon::generate(config.levels, config.level_length, &generator, rng)?;
        Self::from_dungeon(dungeon, config.clone(), hero)
    }

    /// Wraps prebuilt levels, placing the hero as close to the centre of the
    /// first level as possible.
    pub fn from_levels(levels: Vec<Level<Entity>>, config: GameConfig, hero: Hero) -> Result<Self> {
        Self::from_dungeon(Dungeon::from_levels(levels)?, config, hero)
    }

    fn from_dungeon(dungeon: Dungeon<Entity>, config: GameConfig, hero: Hero) -> Result<Self> {
        let mut world = Self {
            dungeon,
            hero_pos: Point::default(),
            config,
            next_id: 0,
        };
        let level = world.dungeon.current_level();
        let start = level
            .nearest_free(level.centre())
            .ok_or(GameError::InvalidConfig("the first level has no free floor".into()))?;
        let id = world.allocate_id();
        world
            .dungeon
            .current_level_mut()
            .add_entity(start, Entity::hero(id, hero))?;
        world.hero_pos = start;
        info!(name = %world.hero()?.stats.name, ?start, "hero enters the dungeon");
        Ok(world)
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Places `monster` on the current level at `p`.
    pub fn spawn_at(&mut self, p: Point, monster: Monster) -> Result<EntityId> {
        let id = self.allocate_id();
        self.dungeon
            .current_level_mut()
            .add_entity(p, Entity::monster(id, monster))?;
        Ok(id)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of levels above the current one.
    pub fn depth(&self) -> usize {
        self.dungeon.depth()
    }

    pub fn level_count(&self) -> usize {
        self.dungeon.level_count()
    }

    pub fn dungeon(&self) -> &Dungeon<Entity> {
        &self.dungeon
    }

    pub fn current_level(&self) -> &Level<Entity> {
        self.dungeon.current_level()
    }

    /// Direct access to the grid, for setting up scenarios.
    pub fn current_level_mut(&mut self) -> &mut Level<Entity> {
        self.dungeon.current_level_mut()
    }

    pub fn hero_position(&self) -> Point {
        self.hero_pos
    }

    pub fn hero(&self) -> Result<&Hero> {
        self.current_level()
            .entity_at(self.hero_pos)
            .and_then(Entity::as_hero)
            .ok_or(self.missing_hero())
    }

    pub fn hero_mut(&mut self) -> Result<&mut Hero> {
        let missing = self.missing_hero();
        let pos = self.hero_pos;
        self.dungeon
            .current_level_mut()
            .entity_at_mut(pos)
            .and_then(Entity::as_hero_mut)
            .ok_or(missing)
    }

    fn missing_hero(&self) -> GameError {
        GameError::MissingEntity {
            x: self.hero_pos.x,
            y: self.hero_pos.y,
        }
    }

    pub fn hero_status(&self) -> Result<HeroStatus> {
        self.hero().map(Hero::status)
    }

    pub fn is_hero_alive(&self) -> bool {
        self.hero().is_ok_and(|h| h.is_alive())
    }

    /// Queues a walk to `target`, replacing whatever the hero had planned.
    pub fn path_to(&mut self, target: Point) -> Result<()> {
        let actions = plan_actions(self.current_level(), self.hero_pos, target)?;
        debug!(steps = actions.len(), ?target, "hero path planned");
        self.hero_mut()?.replace_actions(actions);
        Ok(())
    }

    pub fn enqueue_wait(&mut self) -> Result<()> {
        self.hero_mut()?.enqueue_wait();
        Ok(())
    }

    /// Takes the messages gathered since the last call.
    pub fn drain_messages(&mut self) -> Vec<String> {
        self.hero_mut()
            .map(Hero::drain_messages)
            .unwrap_or_default()
    }

    /// Carries the hero to the adjacent level.
    ///
    /// Going up lands on the down stairway of the level above; going down
    /// lands on the centre of the level below. An occupied arrival tile falls
    /// back to the nearest free one.
    pub(crate) fn take_stairs(&mut self, way: Stairway) -> Result<()> {
        let depth = self.depth();
        let target = match way {
            Stairway::Up => self.dungeon.levels_above().next(),
            Stairway::Down => self.dungeon.levels_below().next(),
        }
        .ok_or(GameError::NoAdjacentLevel { depth })?;

        let landing = match way {
            Stairway::Up => target.find(TileType::DownStairs).unwrap_or(target.centre()),
            Stairway::Down => target.centre(),
        };
        let arrival = target
            .nearest_free(landing)
            .ok_or(GameError::TileOccupied {
                x: landing.x,
                y: landing.y,
            })?;

        let hero = self
            .dungeon
            .current_level_mut()
            .remove_entity(self.hero_pos)
            .ok_or(self.missing_hero())?;
        match way {
            Stairway::Up => self.dungeon.ascend()?,
            Stairway::Down => self.dungeon.descend()?,
        }
        self.dungeon.current_level_mut().add_entity(arrival, hero)?;
        self.hero_pos = arrival;
        Ok(())
    }
}
