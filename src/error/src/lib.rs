//! Error taxonomy shared by every crate of the simulation core.
//!
//! Two kinds of failure live here. Invariant violations (placing an entity
//! on an occupied or impassable tile, addressing a tile outside the grid)
//! are programmer errors and must surface immediately. Data-dependent
//! failures such as [`GameError::PathNotFound`] are expected during play and
//! are recovered by the component that detects them.

use thiserror::Error;

/// Errors produced by the dungeon, entity and world layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// An entity already occupies the tile.
    #[error("entity already exists at ({x}, {y})")]
    TileOccupied { x: i32, y: i32 },

    /// The tile type cannot hold an entity.
    #[error("tile at ({x}, {y}) is unpassable")]
    TileNotPassable { x: i32, y: i32 },

    /// The coordinate lies outside the level grid.
    #[error("point ({x}, {y}) is outside the level")]
    OutOfBounds { x: i32, y: i32 },

    /// A slot or tile that should hold an entity is empty.
    #[error("no entity at ({x}, {y})")]
    MissingEntity { x: i32, y: i32 },

    /// Stair transition past the top or bottom of the dungeon.
    #[error("no level beyond depth {depth}")]
    NoAdjacentLevel { depth: usize },

    /// No route between the two points.
    #[error("no path from {from:?} to {to:?}")]
    PathNotFound { from: (i32, i32), to: (i32, i32) },

    /// Level side length too small for the centre room.
    #[error("level length {length} is below the minimum of {min}")]
    InvalidLevelLength { length: i32, min: i32 },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Returns true for errors that indicate a broken core invariant.
    ///
    /// These are never swallowed by the turn logic; everything else is
    /// either recoverable during play or an input error at construction.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            GameError::TileOccupied { .. }
                | GameError::TileNotPassable { .. }
                | GameError::OutOfBounds { .. }
                | GameError::MissingEntity { .. }
                | GameError::NoAdjacentLevel { .. }
        )
    }

    /// Returns true when the failing operation can simply be skipped.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::PathNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
