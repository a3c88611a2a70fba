//src/dungeon/src/lib.rs
//! Spatial layer of the game: tile grids, level generation and pathfinding.
//!
//! Levels are generic over the entity type they hold so that this crate stays
//! independent of the actors built on top of it.

use error::{GameError, Result};
use rand::Rng;
use tracing::info;

pub mod generator;
pub mod geometry;
pub mod level;
pub mod pathfinding;
pub mod rooms;
pub mod tiles;

pub use crate::generator::{
    GenerationReport, LevelGenerator, MIN_LEVEL_LENGTH, check_fill_rect, fill_rect,
    generate_level, generate_seeded, valid_wall_points,
};
pub use crate::geometry::{Direction, Point};
pub use crate::level::Level;
pub use crate::pathfinding::find_path;
pub use crate::rooms::Rect;
pub use crate::tiles::{Tile, TileType};

/// Every level of one game plus a cursor on the level currently played.
///
/// Index 0 is the top of the dungeon. Levels with a smaller index than the
/// cursor are "above", those with a larger one "below"; the cursor itself is
/// the depth, i.e. the number of levels above the current one.
#[derive(Clone, Debug)]
pub struct Dungeon<E> {
    levels: Vec<Level<E>>,
    depth: usize,
}

impl<E> Dungeon<E> {
    /// Generates `level_count` levels of side `length`.
    ///
    /// Every level but the first has an up stairway on its centre point and
    /// every level but the last has a down stairway.
    pub fn generate<R: Rng>(
        level_count: usize,
        length: i32,
        generator: &LevelGenerator,
        rng: &mut R,
    ) -> Result<Self> {
        if level_count == 0 {
            return Err(GameError::InvalidConfig(
                "a dungeon needs at least one level".into(),
            ));
        }
        let levels = (0..level_count)
            .map(|i| generator.generate(length, rng, i > 0, i + 1 < level_count))
            .collect::<Result<Vec<_>>>()?;
        Self::from_levels(levels)
    }

    /// Wraps prebuilt levels, starting on the first one.
    pub fn from_levels(levels: Vec<Level<E>>) -> Result<Self> {
        if levels.is_empty() {
            return Err(GameError::InvalidConfig(
                "a dungeon needs at least one level".into(),
            ));
        }
        Ok(Self { levels, depth: 0 })
    }

    /// Number of levels above the current one.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current_level(&self) -> &Level<E> {
        &self.levels[self.depth]
    }

    pub fn current_level_mut(&mut self) -> &mut Level<E> {
        &mut self.levels[self.depth]
    }

    /// Levels above the current one, nearest first.
    pub fn levels_above(&self) -> impl Iterator<Item = &Level<E>> {
        self.levels[..self.depth].iter().rev()
    }

    /// Levels below the current one, nearest first.
    pub fn levels_below(&self) -> impl Iterator<Item = &Level<E>> {
        self.levels[self.depth + 1..].iter()
    }

    pub fn can_ascend(&self) -> bool {
        self.depth > 0
    }

    pub fn can_descend(&self) -> bool {
        self.depth + 1 < self.levels.len()
    }

    /// Moves the cursor one level up.
    pub fn ascend(&mut self) -> Result<()> {
        if !self.can_ascend() {
            return Err(GameError::NoAdjacentLevel { depth: self.depth });
        }
        self.depth -= 1;
        info!(depth = self.depth, "ascended");
        Ok(())
    }

    /// Moves the cursor one level down.
    pub fn descend(&mut self) -> Result<()> {
        if !self.can_descend() {
            return Err(GameError::NoAdjacentLevel { depth: self.depth });
        }
        self.depth += 1;
        info!(depth = self.depth, "descended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_dungeon_stairs_layout() {
        let mut rng = Pcg64::seed_from_u64(7);
        let dungeon: Dungeon<()> =
            Dungeon::generate(4, 20, &LevelGenerator::default(), &mut rng).unwrap();
        assert_eq!(dungeon.level_count(), 4);

        let all: Vec<&Level<()>> = std::iter::once(dungeon.current_level())
            .chain(dungeon.levels_below())
            .collect();
        for (i, level) in all.iter().enumerate() {
            let up = level.count(TileType::UpStairs);
            let down = level.count(TileType::DownStairs);
            assert_eq!(up, usize::from(i > 0), "level {i}");
            assert_eq!(down, usize::from(i < 3), "level {i}");
        }
    }

    #[test]
    fn test_cursor_moves() {
        let levels: Vec<Level<()>> = (0..3).map(|_| Level::new(11)).collect();
        let mut dungeon = Dungeon::from_levels(levels).unwrap();
        assert_eq!(
            dungeon.ascend(),
            Err(GameError::NoAdjacentLevel { depth: 0 })
        );
        dungeon.descend().unwrap();
        dungeon.descend().unwrap();
        assert_eq!(dungeon.depth(), 2);
        assert_eq!(dungeon.levels_above().count(), 2);
        assert_eq!(dungeon.levels_below().count(), 0);
        assert!(dungeon.descend().is_err());
        dungeon.ascend().unwrap();
        assert_eq!(dungeon.depth(), 1);
    }

    #[test]
    fn test_empty_dungeon_rejected() {
        let result: Result<Dungeon<()>> = Dungeon::from_levels(Vec::new());
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }
}
