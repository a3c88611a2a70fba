// src/systems.rs
//! Per-entity turn logic: hero commands, monster pursuit and spawning.

use combat::{Combat, Combatant, Monster, random_species};
use dungeon::{Point, TileType, find_path};
use error::Result;
use hero::HeroAction;
use rand::Rng;
use tracing::{debug, info};

use crate::entity::EntityId;
use crate::turn_system::StepOutcome;
use crate::world::{Stairway, World};

/// What the turn pass should do after updating one entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SystemResult {
    Continue,
    /// End the tick early with this outcome
    Stop(StepOutcome),
}

/// Runs one tick for the entity standing on `pos`.
pub fn update_entity(world: &mut World, pos: Point) -> Result<SystemResult> {
    let is_hero = match world.current_level().entity_at(pos) {
        Some(entity) => entity.is_hero(),
        None => return Ok(SystemResult::Continue),
    };
    if is_hero {
        update_hero(world)
    } else {
        update_monster(world, pos)
    }
}

fn update_monster(world: &mut World, pos: Point) -> Result<SystemResult> {
    let alive = world
        .current_level()
        .entity_at(pos)
        .is_some_and(|e| e.is_alive());
    if !alive {
        if let Some(corpse) = world.current_level_mut().remove_entity(pos) {
            let hero = world.hero_mut()?;
            hero.reward_kill();
            hero.push_message(format!("The {} dies.", corpse.name()));
            debug!(name = corpse.name(), ?pos, "monster died");
        }
        return Ok(SystemResult::Continue);
    }

    let can_act = world
        .current_level()
        .entity_at(pos)
        .is_some_and(|e| e.stats().can_act());
    let pos = if can_act { monster_turn(world, pos)? } else { pos };

    if let Some(monster) = world.current_level_mut().entity_at_mut(pos) {
        monster.stats_mut().accrue_energy();
    }

    if !world.is_hero_alive() {
        let hero = world.hero_mut()?;
        hero.push_message("You die...");
        info!(score = hero.score, level = hero.level, "hero died");
        return Ok(SystemResult::Stop(StepOutcome::HeroDied));
    }
    Ok(SystemResult::Continue)
}

/// Moves the monster on `pos` one step toward the hero, returning where it
/// ends up. Blocked moves cost nothing.
pub fn monster_turn(world: &mut World, pos: Point) -> Result<Point> {
    let hero_pos = world.hero_position();
    let path = match find_path(pos, hero_pos, world.current_level()) {
        Ok(path) => path,
        Err(e) if e.is_recoverable() => return Ok(pos),
        Err(e) => return Err(e),
    };
    let Some(&first) = path.first() else {
        return Ok(pos);
    };
    let dest = pos.step(first);
    let level = world.current_level_mut();

    let Some(attacker) = level.entity_at(pos) else {
        return Ok(pos);
    };
    let attacker_stats = attacker.stats().clone();
    let opens_doors = attacker.opens_doors();

    if dest == hero_pos {
        if let Some(target) = level.entity_at_mut(dest) {
            let result = Combat::resolve_attack(&attacker_stats, target);
            if let Some(hero) = target.as_hero_mut() {
                for line in result.logs {
                    hero.push_message(line);
                }
            }
        }
        spend_action(world, pos);
        return Ok(pos);
    }

    if level.is_occupied(dest) {
        return Ok(pos);
    }

    match level.tile_type(dest) {
        Some(TileType::ClosedDoor) if opens_doors => {
            level.open_door(dest);
            spend_action(world, pos);
            Ok(pos)
        }
        Some(t) if t.is_passable() => {
            level.move_entity(pos, dest)?;
            spend_action(world, dest);
            Ok(dest)
        }
        _ => Ok(pos),
    }
}

fn spend_action(world: &mut World, pos: Point) {
    if let Some(entity) = world.current_level_mut().entity_at_mut(pos) {
        entity.stats_mut().spend_action();
    }
}

fn update_hero(world: &mut World) -> Result<SystemResult> {
    if !world.is_hero_alive() {
        return Ok(SystemResult::Stop(StepOutcome::HeroDied));
    }

    let action = {
        let hero = world.hero_mut()?;
        hero.update_level();
        hero.regenerate();
        if !hero.stats.can_act() {
            None
        } else {
            let action = hero.next_action();
            if action.is_some() {
                hero.stats.spend_action();
            }
            action
        }
    };

    let result = match action {
        Some(action) => hero_turn(world, action)?,
        None => SystemResult::Continue,
    };

    world.hero_mut()?.stats.accrue_energy();
    Ok(result)
}

/// Carries out one hero command. The energy has already been paid.
pub fn hero_turn(world: &mut World, action: HeroAction) -> Result<SystemResult> {
    let Some(dir) = action.direction() else {
        return Ok(SystemResult::Continue);
    };
    let dest = world.hero_position().step(dir);

    if world.current_level().is_occupied(dest) {
        hero_attack(world, dest)?;
        if matches!(action, HeroAction::Move(_)) {
            world.hero_mut()?.clear_actions();
        }
        return Ok(SystemResult::Continue);
    }

    let tile_type = world.current_level().tile_type(dest);
    match (action, tile_type) {
        (_, Some(TileType::ClosedDoor)) => {
            world.current_level_mut().open_door(dest);
            let hero = world.hero_mut()?;
            hero.push_message("You open the door.");
            // Step through on the next action.
            if let HeroAction::Move(_) = action {
                hero.push_front(action);
            }
        }
        (HeroAction::Move(_), Some(t)) if t.is_passable() => {
            let from = world.hero_position();
            world.current_level_mut().move_entity(from, dest)?;
            world.hero_pos = dest;
        }
        (HeroAction::Move(_), t) => {
            let name = t.map_or("the edge of the world", TileType::name);
            let hero = world.hero_mut()?;
            hero.push_message(format!("The way is blocked by {}.", name.to_lowercase()));
            hero.clear_actions();
        }
        (HeroAction::Use(_), Some(TileType::UpStairs)) => {
            return climb(world, Stairway::Up);
        }
        (HeroAction::Use(_), Some(TileType::DownStairs)) => {
            return climb(world, Stairway::Down);
        }
        (HeroAction::Use(_), Some(TileType::OpenDoor)) => {
            world.current_level_mut().close_door(dest);
            world.hero_mut()?.push_message("You close the door.");
        }
        _ => {}
    }
    Ok(SystemResult::Continue)
}

fn hero_attack(world: &mut World, dest: Point) -> Result<()> {
    let attacker_stats = world.hero()?.stats.clone();
    let Some(target) = world.current_level_mut().entity_at_mut(dest) else {
        return Ok(());
    };
    let result = Combat::resolve_attack(&attacker_stats, target);
    let hero = world.hero_mut()?;
    for line in result.logs {
        hero.push_message(line);
    }
    Ok(())
}

fn climb(world: &mut World, way: Stairway) -> Result<SystemResult> {
    world.take_stairs(way)?;
    let depth = world.depth();
    let message = match way {
        Stairway::Up => format!("You climb up to depth {depth}."),
        Stairway::Down => format!("You descend to depth {depth}."),
    };
    world.hero_mut()?.push_message(message);
    Ok(SystemResult::Stop(StepOutcome::LevelChanged))
}

/// Possibly spawns a monster on a random floor tile of the current level.
pub fn spawn_monster<R: Rng>(world: &mut World, rng: &mut R) -> Result<Option<EntityId>> {
    let depth = world.depth();
    let level = world.current_level();
    if level.live_entity_count() >= world.config.max_entities {
        return Ok(None);
    }
    if !rng.random_bool(world.config.spawn_chance_at(depth)) {
        return Ok(None);
    }

    let length = level.length();
    let p = Point::new(rng.random_range(0..length), rng.random_range(0..length));
    if level.tile_type(p) != Some(TileType::Floor) || level.is_occupied(p) {
        return Ok(None);
    }

    let kind = random_species(depth, rng);
    let id = world.spawn_at(p, Monster::new(kind))?;
    debug!(%kind, ?p, depth, "monster spawned");
    Ok(Some(id))
}
