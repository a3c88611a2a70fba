/// Level transitions through stairways, in generated dungeons.
mod common;

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use renethack::{Direction, GameConfig, Point, StepOutcome, TileType, World};

use common::{hero, quiet_config};

fn dungeon(seed: u64) -> (World, Pcg64) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let config = GameConfig {
        levels: 3,
        level_length: 25,
        ..quiet_config()
    };
    let world = World::from_config(&config, hero(100, 5, 100, 5), &mut rng).unwrap();
    (world, rng)
}

/// Walks toward `target` until the tick reports a level change.
fn walk_until_level_change(world: &mut World, rng: &mut Pcg64, target: Point) {
    world.path_to(target).unwrap();
    for _ in 0..500 {
        if world.step(rng).unwrap() == StepOutcome::LevelChanged {
            return;
        }
    }
    panic!("never reached the stairs at {target:?}");
}

#[test]
fn test_descend_and_climb_back() {
    let (mut world, mut rng) = dungeon(21);
    let down = world.current_level().find(TileType::DownStairs).unwrap();

    walk_until_level_change(&mut world, &mut rng, down);
    assert_eq!(world.depth(), 1);
    let centre = world.current_level().centre();
    assert_eq!(world.hero_position(), centre);
    assert_eq!(world.current_level().tile_type(centre), Some(TileType::UpStairs));
    assert_eq!(
        world.drain_messages().last().map(String::as_str),
        Some("You descend to depth 1.")
    );

    // Step off the up stairway, then use it.
    let beside = Direction::ALL
        .into_iter()
        .map(|d| centre.step(d))
        .find(|&p| world.current_level().tile_type(p) == Some(TileType::Floor))
        .unwrap();
    world.path_to(beside).unwrap();
    for _ in 0..4 {
        world.step(&mut rng).unwrap();
    }
    assert_eq!(world.hero_position(), beside);

    walk_until_level_change(&mut world, &mut rng, centre);
    assert_eq!(world.depth(), 0);
    assert_eq!(world.hero_position(), down);
    assert_eq!(world.current_level().tile_type(down), Some(TileType::DownStairs));
}

#[test]
fn test_levels_keep_their_state() {
    let (mut world, mut rng) = dungeon(22);
    let doors = |level: &renethack::Level<renethack::Entity>| {
        level.count(TileType::OpenDoor) + level.count(TileType::ClosedDoor)
    };
    let doors_before = doors(world.current_level());
    let down = world.current_level().find(TileType::DownStairs).unwrap();
    walk_until_level_change(&mut world, &mut rng, down);

    let above = world.dungeon().levels_above().next().unwrap();
    assert_eq!(doors(above), doors_before);
    assert_eq!(above.live_entity_count(), 0);
}

#[test]
fn test_path_to_self_is_empty() {
    let (mut world, _) = dungeon(23);
    let here = world.hero_position();
    world.path_to(here).unwrap();
    assert!(!world.hero().unwrap().has_actions());
}
