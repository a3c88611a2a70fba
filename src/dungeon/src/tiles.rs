// src/dungeon/src/tiles.rs
use serde::{Deserialize, Serialize};

/// Terrain of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// Unexcavated rock, the initial state of every cell
    SolidEarth,
    Wall,
    Floor,
    UpStairs,
    DownStairs,
    /// Blocks movement until opened by an entity able to open doors
    ClosedDoor,
    OpenDoor,
}

impl TileType {
    pub const ALL: [TileType; 7] = [
        TileType::SolidEarth,
        TileType::Wall,
        TileType::Floor,
        TileType::UpStairs,
        TileType::DownStairs,
        TileType::ClosedDoor,
        TileType::OpenDoor,
    ];

    /// Human-readable name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            TileType::SolidEarth => "Solid earth",
            TileType::Wall => "Wall",
            TileType::Floor => "Floor",
            TileType::UpStairs => "Upwards stairway",
            TileType::DownStairs => "Downwards stairway",
            TileType::ClosedDoor => "Closed door",
            TileType::OpenDoor => "Open door",
        }
    }

    /// Whether an entity may stand on this tile.
    pub fn is_passable(self) -> bool {
        matches!(
            self,
            TileType::Floor | TileType::UpStairs | TileType::DownStairs | TileType::OpenDoor
        )
    }

    /// Passable, or a closed door that a mover may open on the way.
    pub fn is_pathable(self) -> bool {
        self.is_passable() || self == TileType::ClosedDoor
    }

    pub fn is_door(self) -> bool {
        matches!(self, TileType::ClosedDoor | TileType::OpenDoor)
    }

    pub fn is_stairs(self) -> bool {
        matches!(self, TileType::UpStairs | TileType::DownStairs)
    }
}

/// A grid cell: terrain plus at most one occupying entity.
#[derive(Clone, Debug)]
pub struct Tile<E> {
    pub tile_type: TileType,
    entity: Option<E>,
}

impl<E> Tile<E> {
    pub fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            entity: None,
        }
    }

    pub fn entity(&self) -> Option<&E> {
        self.entity.as_ref()
    }

    pub fn entity_mut(&mut self) -> Option<&mut E> {
        self.entity.as_mut()
    }

    pub fn has_entity(&self) -> bool {
        self.entity.is_some()
    }

    /// Passable terrain with nobody standing on it.
    pub fn is_free(&self) -> bool {
        self.tile_type.is_passable() && self.entity.is_none()
    }

    pub(crate) fn put_entity(&mut self, entity: E) {
        self.entity = Some(entity);
    }

    pub(crate) fn take_entity(&mut self) -> Option<E> {
        self.entity.take()
    }

    /// Opens a closed door. Returns whether the tile changed.
    pub fn try_open_door(&mut self) -> bool {
        if self.tile_type == TileType::ClosedDoor {
            self.tile_type = TileType::OpenDoor;
            true
        } else {
            false
        }
    }

    /// Closes an open door; a door with someone in it stays open.
    pub fn try_close_door(&mut self) -> bool {
        if self.tile_type == TileType::OpenDoor && self.entity.is_none() {
            self.tile_type = TileType::ClosedDoor;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passability_table() {
        for tile_type in TileType::ALL {
            let expected = matches!(
                tile_type,
                TileType::Floor | TileType::OpenDoor | TileType::UpStairs | TileType::DownStairs
            );
            assert_eq!(tile_type.is_passable(), expected, "{}", tile_type.name());
        }
        assert!(TileType::ClosedDoor.is_pathable());
        assert!(!TileType::Wall.is_pathable());
    }

    #[test]
    fn test_door_toggle() {
        let mut tile: Tile<u8> = Tile::new(TileType::ClosedDoor);
        assert!(tile.try_open_door());
        assert_eq!(tile.tile_type, TileType::OpenDoor);
        assert!(!tile.try_open_door());

        tile.put_entity(1);
        assert!(!tile.try_close_door());
        tile.take_entity();
        assert!(tile.try_close_door());
        assert_eq!(tile.tile_type, TileType::ClosedDoor);
    }
}
