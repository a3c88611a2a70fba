// src/hero/src/action.rs

use dungeon::{Direction, Level, Point, find_path};
use error::Result;
use serde::{Deserialize, Serialize};

/// One queued hero command, consumed at one per action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroAction {
    /// Step into the neighbouring tile, attacking or opening a door when needed
    Move(Direction),
    /// Interact with the neighbouring tile: stairs, doors or an occupant
    Use(Direction),
    Wait,
}

impl HeroAction {
    pub fn direction(self) -> Option<Direction> {
        match self {
            HeroAction::Move(dir) | HeroAction::Use(dir) => Some(dir),
            HeroAction::Wait => None,
        }
    }
}

/// Turns a path from `from` to `target` into hero actions.
///
/// When the target holds stairs or a door the last step becomes a `Use` so
/// the hero interacts with it instead of walking in.
pub fn plan_actions<E>(level: &Level<E>, from: Point, target: Point) -> Result<Vec<HeroAction>> {
    let path = find_path(from, target, level)?;
    let interact = level
        .tile_type(target)
        .is_some_and(|t| t.is_stairs() || t.is_door());

    let last = path.len().saturating_sub(1);
    Ok(path
        .into_iter()
        .enumerate()
        .map(|(i, dir)| {
            if interact && i == last {
                HeroAction::Use(dir)
            } else {
                HeroAction::Move(dir)
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon::TileType;
    use pretty_assertions::assert_eq;

    fn corridor(end: TileType) -> Level<()> {
        let mut level = Level::new(11);
        for x in 1..=5 {
            level.set_tile_type(Point::new(x, 1), TileType::Floor).unwrap();
        }
        level.set_tile_type(Point::new(5, 1), end).unwrap();
        level
    }

    #[test]
    fn test_plain_target_is_all_moves() {
        let level = corridor(TileType::Floor);
        let actions = plan_actions(&level, Point::new(1, 1), Point::new(5, 1)).unwrap();
        assert_eq!(actions, vec![HeroAction::Move(Direction::East); 4]);
    }

    #[test]
    fn test_stairs_target_ends_with_use() {
        let level = corridor(TileType::DownStairs);
        let actions = plan_actions(&level, Point::new(1, 1), Point::new(5, 1)).unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[3], HeroAction::Use(Direction::East));
        assert_eq!(actions[2], HeroAction::Move(Direction::East));
    }

    #[test]
    fn test_door_target_ends_with_use() {
        let level = corridor(TileType::ClosedDoor);
        let actions = plan_actions(&level, Point::new(4, 1), Point::new(5, 1)).unwrap();
        assert_eq!(actions, vec![HeroAction::Use(Direction::East)]);
    }

    #[test]
    fn test_target_on_self_plans_nothing() {
        let level = corridor(TileType::UpStairs);
        assert!(plan_actions(&level, Point::new(5, 1), Point::new(5, 1)).unwrap().is_empty());
    }
}
