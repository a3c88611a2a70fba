// src/dungeon/src/level.rs

use error::{GameError, Result};

use crate::geometry::Point;
use crate::tiles::{Tile, TileType};

/// One floor of the dungeon: a square tile grid plus the turn order of the
/// entities standing on it.
///
/// The entity list holds the position of every occupied tile in insertion
/// order. Removal leaves a hole (`None`) instead of shifting the list so that
/// an index held by an in-progress turn pass stays valid; holes are dropped by
/// [`Level::compact_entities`] once a pass has completed.
#[derive(Clone, Debug)]
pub struct Level<E> {
    tiles: Vec<Vec<Tile<E>>>,
    entities: Vec<Option<Point>>,
}

impl<E> Level<E> {
    /// Creates a `length × length` level made entirely of solid earth.
    pub fn new(length: i32) -> Self {
        let length = length.max(0) as usize;
        let tiles = (0..length)
            .map(|_| (0..length).map(|_| Tile::new(TileType::SolidEarth)).collect())
            .collect();
        Self {
            tiles,
            entities: Vec::new(),
        }
    }

    /// Side length of the grid.
    pub fn length(&self) -> i32 {
        self.tiles.len() as i32
    }

    /// The centre point, where the up stairway of a level sits.
    pub fn centre(&self) -> Point {
        let c = (self.length() - 1) / 2;
        Point::new(c, c)
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.length() && p.y < self.length()
    }

    pub fn tile(&self, p: Point) -> Option<&Tile<E>> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(&self.tiles[p.x as usize][p.y as usize])
    }

    pub fn tile_mut(&mut self, p: Point) -> Option<&mut Tile<E>> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(&mut self.tiles[p.x as usize][p.y as usize])
    }

    fn tile_or_err(&self, p: Point) -> Result<&Tile<E>> {
        self.tile(p).ok_or(GameError::OutOfBounds { x: p.x, y: p.y })
    }

    fn tile_mut_or_err(&mut self, p: Point) -> Result<&mut Tile<E>> {
        self.tile_mut(p)
            .ok_or(GameError::OutOfBounds { x: p.x, y: p.y })
    }

    pub fn tile_type(&self, p: Point) -> Option<TileType> {
        self.tile(p).map(|t| t.tile_type)
    }

    pub fn set_tile_type(&mut self, p: Point, tile_type: TileType) -> Result<()> {
        self.tile_mut_or_err(p)?.tile_type = tile_type;
        Ok(())
    }

    /// Every point of the grid, column by column.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let length = self.length();
        (0..length).flat_map(move |x| (0..length).map(move |y| Point::new(x, y)))
    }

    /// All points whose tile has the given type.
    pub fn points_of(&self, tile_type: TileType) -> Vec<Point> {
        self.points()
            .filter(|&p| self.tile_type(p) == Some(tile_type))
            .collect()
    }

    pub fn count(&self, tile_type: TileType) -> usize {
        self.points()
            .filter(|&p| self.tile_type(p) == Some(tile_type))
            .count()
    }

    /// First point (column-major) with the given tile type.
    pub fn find(&self, tile_type: TileType) -> Option<Point> {
        self.points().find(|&p| self.tile_type(p) == Some(tile_type))
    }

    pub fn entity_at(&self, p: Point) -> Option<&E> {
        self.tile(p).and_then(Tile::entity)
    }

    pub fn entity_at_mut(&mut self, p: Point) -> Option<&mut E> {
        self.tile_mut(p).and_then(Tile::entity_mut)
    }

    pub fn is_occupied(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::has_entity)
    }

    fn check_placeable(&self, p: Point) -> Result<()> {
        let tile = self.tile_or_err(p)?;
        if tile.has_entity() {
            return Err(GameError::TileOccupied { x: p.x, y: p.y });
        }
        if !tile.tile_type.is_passable() {
            return Err(GameError::TileNotPassable { x: p.x, y: p.y });
        }
        Ok(())
    }

    /// Places `entity` at `p` and appends it to the turn order.
    pub fn add_entity(&mut self, p: Point, entity: E) -> Result<()> {
        self.check_placeable(p)?;
        self.tile_mut_or_err(p)?.put_entity(entity);
        self.entities.push(Some(p));
        Ok(())
    }

    /// Takes the entity off `p`, leaving a hole in the turn order.
    pub fn remove_entity(&mut self, p: Point) -> Option<E> {
        let entity = self.tile_mut(p)?.take_entity()?;
        for slot in self.entities.iter_mut().filter(|s| **s == Some(p)) {
            *slot = None;
        }
        Some(entity)
    }

    /// Relocates the entity at `from` to `to`, keeping its turn-order slot.
    pub fn move_entity(&mut self, from: Point, to: Point) -> Result<()> {
        if !self.is_occupied(from) {
            return Err(GameError::MissingEntity {
                x: from.x,
                y: from.y,
            });
        }
        self.check_placeable(to)?;

        let entity = self
            .tile_mut_or_err(from)?
            .take_entity()
            .ok_or(GameError::MissingEntity {
                x: from.x,
                y: from.y,
            })?;
        self.tile_mut_or_err(to)?.put_entity(entity);

        if let Some(slot) = self.entities.iter_mut().find(|s| **s == Some(from)) {
            *slot = Some(to);
        }
        Ok(())
    }

    /// Turn order, holes included.
    pub fn entity_slots(&self) -> &[Option<Point>] {
        &self.entities
    }

    pub fn slot(&self, index: usize) -> Option<Point> {
        self.entities.get(index).copied().flatten()
    }

    pub fn live_entity_count(&self) -> usize {
        self.entities.iter().filter(|s| s.is_some()).count()
    }

    /// Drops the holes left by removed entities.
    pub fn compact_entities(&mut self) {
        self.entities.retain(Option::is_some);
    }

    pub fn open_door(&mut self, p: Point) -> bool {
        self.tile_mut(p).is_some_and(Tile::try_open_door)
    }

    pub fn close_door(&mut self, p: Point) -> bool {
        self.tile_mut(p).is_some_and(Tile::try_close_door)
    }

    /// Nearest free passable tile to `p` (by Chebyshev ring), `p` included.
    pub fn nearest_free(&self, p: Point) -> Option<Point> {
        (0..self.length()).find_map(|radius| {
            let mut ring = (-radius..=radius).flat_map(move |dx| {
                (-radius..=radius)
                    .filter(move |dy| dx.abs() == radius || dy.abs() == radius)
                    .map(move |dy| Point::new(p.x + dx, p.y + dy))
            });
            ring.find(|&q| self.tile(q).is_some_and(Tile::is_free))
        })
    }
}
