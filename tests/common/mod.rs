//! Builders for hand-made worlds with deterministic layouts.

#![allow(dead_code)]

use renethack::{Entity, GameConfig, Hero, Level, Point, TileType, World};

/// A walled square room of side `length` with a floor interior.
pub fn room(length: i32) -> Level<Entity> {
    let mut level = Level::new(length);
    let points: Vec<Point> = level.points().collect();
    for p in points {
        let border = p.x == 0 || p.y == 0 || p.x == length - 1 || p.y == length - 1;
        let t = if border { TileType::Wall } else { TileType::Floor };
        level.set_tile_type(p, t).unwrap();
    }
    level
}

/// Spawning switched off so scenarios only contain what they place.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        spawn_chance: 0.0,
        spawn_chance_per_depth: 0.0,
        max_spawn_chance: 0.0,
        ..GameConfig::default()
    }
}

/// A single 11×11 room with the hero on its centre, (5, 5).
pub fn room_world(hero: Hero) -> World {
    World::from_levels(vec![room(11)], quiet_config(), hero).unwrap()
}

pub fn hero(hit_points: i32, defence: i32, speed: i32, strength: i32) -> Hero {
    Hero::new("Ada", hit_points, defence, speed, strength)
}
