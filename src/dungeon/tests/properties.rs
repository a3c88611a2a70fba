//! Property tests over generated levels.

use dungeon::{Direction, Level, Point, TileType, find_path, generate_seeded};
use proptest::prelude::*;

fn walkable(level: &Level<()>) -> Vec<Point> {
    level
        .points()
        .filter(|&p| level.tile_type(p).is_some_and(TileType::is_pathable))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generated_levels_have_single_stairs(seed in any::<u64>(), length in 11i32..40) {
        let level: Level<()> = generate_seeded(length, seed, true, true).unwrap();
        prop_assert_eq!(level.count(TileType::UpStairs), 1);
        prop_assert_eq!(level.count(TileType::DownStairs), 1);
        prop_assert_eq!(level.tile_type(level.centre()), Some(TileType::UpStairs));
    }

    #[test]
    fn paths_sum_to_displacement(seed in any::<u64>(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let level: Level<()> = generate_seeded(24, seed, true, true).unwrap();
        let tiles = walkable(&level);
        let start = *a.get(&tiles);
        let target = *b.get(&tiles);

        let path = find_path(start, target, &level).unwrap();

        let (dx, dy) = path.iter().fold((0, 0), |(x, y), d| {
            let (ddx, ddy) = d.delta();
            (x + ddx, y + ddy)
        });
        prop_assert_eq!((start.x + dx, start.y + dy), (target.x, target.y));

        let mut p = start;
        for d in &path {
            p = p.step(*d);
            prop_assert!(level.tile_type(p).is_some_and(TileType::is_pathable));
        }
    }

    #[test]
    fn floor_is_enclosed(seed in any::<u64>(), length in 11i32..48) {
        let level: Level<()> = generate_seeded(length, seed, true, true).unwrap();
        for p in walkable(&level) {
            for dir in Direction::ALL {
                let next = level.tile_type(p.step(dir));
                prop_assert!(
                    next.is_some_and(|t| t != TileType::SolidEarth),
                    "{:?} at {:?} leaks towards {:?}", level.tile_type(p), p, dir
                );
            }
        }
    }

    #[test]
    fn doors_sit_in_wall_seams(seed in any::<u64>(), length in 11i32..48) {
        let level: Level<()> = generate_seeded(length, seed, true, true).unwrap();
        let pathable = |p: Point| level.tile_type(p).is_some_and(TileType::is_pathable);
        for door in level.points_of(TileType::ClosedDoor) {
            let across = [Direction::East, Direction::West].map(|d| pathable(door.step(d)));
            let along = [Direction::North, Direction::South].map(|d| pathable(door.step(d)));
            let seam = (across == [true, true] && along == [false, false])
                || (across == [false, false] && along == [true, true]);
            prop_assert!(seam, "door at {:?}: east/west {:?}, north/south {:?}", door, across, along);
        }
    }
}

#[test]
fn direction_deltas_cancel_out() {
    let sum = Direction::ALL.iter().fold((0, 0), |(x, y), d| {
        let (dx, dy) = d.delta();
        (x + dx, y + dy)
    });
    assert_eq!(sum, (0, 0));
}
