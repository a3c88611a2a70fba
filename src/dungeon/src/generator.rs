// src/dungeon/src/generator.rs
//! Room-and-corridor level generator.
//!
//! A level starts as solid earth with a single room carved around its
//! centre. Features are then grown outwards: a random wall tile bordering a
//! floor is picked and a room or corridor is fitted on its far side. Each
//! failed fit counts as a rejection; after `reject_limit` rejections in a row
//! the level is considered full. Density therefore depends on the grid
//! length rather than on a target room count.

use std::ops::RangeInclusive;

use error::{GameError, Result};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;

use crate::geometry::{Direction, Point};
use crate::level::Level;
use crate::rooms::Rect;
use crate::tiles::TileType;

/// Smallest grid that always fits the centre room with its walls.
pub const MIN_LEVEL_LENGTH: i32 = 11;
/// Consecutive failed placements after which extension stops.
pub const DEFAULT_REJECT_LIMIT: u32 = 20;

const ROOM_SIDE: RangeInclusive<i32> = 4..=7;
const CORRIDOR_LENGTH: RangeInclusive<i32> = 5..=15;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Feature {
    Room,
    Corridor,
}

/// Counters collected while extending a level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub rooms: u32,
    pub corridors: u32,
    pub rejections: u32,
}

/// Level generator with a tunable rejection bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelGenerator {
    pub reject_limit: u32,
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self {
            reject_limit: DEFAULT_REJECT_LIMIT,
        }
    }
}

impl LevelGenerator {
    pub fn new(reject_limit: u32) -> Self {
        Self { reject_limit }
    }

    /// Builds one `length × length` level.
    ///
    /// The up stairway, when requested, sits on the centre point. The down
    /// stairway replaces a random floor tile once extension has finished.
    pub fn generate<E, R: Rng>(
        &self,
        length: i32,
        rng: &mut R,
        place_up_stairs: bool,
        place_down_stairs: bool,
    ) -> Result<Level<E>> {
        Ok(self
            .generate_with_report(length, rng, place_up_stairs, place_down_stairs)?
            .0)
    }

    /// Like [`LevelGenerator::generate`], also returning the placement counters.
    pub fn generate_with_report<E, R: Rng>(
        &self,
        length: i32,
        rng: &mut R,
        place_up_stairs: bool,
        place_down_stairs: bool,
    ) -> Result<(Level<E>, GenerationReport)> {
        if length < MIN_LEVEL_LENGTH {
            return Err(GameError::InvalidLevelLength {
                length,
                min: MIN_LEVEL_LENGTH,
            });
        }

        let mut level = Level::new(length);
        let centre = level.centre();
        carve_centre_room(&mut level, centre, rng);
        if place_up_stairs {
            level.set_tile_type(centre, TileType::UpStairs)?;
        }

        let report = self.extend(&mut level, rng);

        if place_down_stairs {
            if let Some(&p) = level.points_of(TileType::Floor).choose(rng) {
                level.set_tile_type(p, TileType::DownStairs)?;
            }
        }

        debug!(
            length,
            rooms = report.rooms,
            corridors = report.corridors,
            rejections = report.rejections,
            "level generated"
        );
        Ok((level, report))
    }

    fn extend<E, R: Rng>(&self, level: &mut Level<E>, rng: &mut R) -> GenerationReport {
        let mut report = GenerationReport::default();
        let mut reject_count = 0;

        while reject_count < self.reject_limit {
            let walls = valid_wall_points(level);
            // A level with nowhere left to grow rejects immediately.
            let Some(&wall_point) = walls.choose(rng) else {
                reject_count += 1;
                report.rejections += 1;
                continue;
            };

            let feature = if rng.random_bool(0.5) {
                Feature::Room
            } else {
                Feature::Corridor
            };
            let placed = match feature {
                Feature::Room => make_room(level, wall_point, rng),
                Feature::Corridor => make_corridor(level, wall_point, rng),
            };

            if placed {
                reject_count = 0;
                match feature {
                    Feature::Room => report.rooms += 1,
                    Feature::Corridor => report.corridors += 1,
                }
            } else {
                reject_count += 1;
                report.rejections += 1;
            }
        }

        report
    }
}

/// Generates a level with the default rejection bound.
pub fn generate_level<E, R: Rng>(
    length: i32,
    rng: &mut R,
    place_up_stairs: bool,
    place_down_stairs: bool,
) -> Result<Level<E>> {
    LevelGenerator::default().generate(length, rng, place_up_stairs, place_down_stairs)
}

/// Generates a level from a seed, reproducibly.
pub fn generate_seeded<E>(
    length: i32,
    seed: u64,
    place_up_stairs: bool,
    place_down_stairs: bool,
) -> Result<Level<E>> {
    let mut rng = Pcg64::seed_from_u64(seed);
    generate_level(length, &mut rng, place_up_stairs, place_down_stairs)
}

/// Overwrites every in-bounds tile of `rect` with `tile_type`.
pub fn fill_rect<E>(level: &mut Level<E>, rect: Rect, tile_type: TileType) {
    for p in rect.points() {
        if let Some(tile) = level.tile_mut(p) {
            tile.tile_type = tile_type;
        }
    }
}

/// Fills `rect` only if it lies in bounds and is solid earth throughout.
///
/// Nothing is written when the check fails.
pub fn check_fill_rect<E>(level: &mut Level<E>, rect: Rect, tile_type: TileType) -> bool {
    let fits = rect
        .points()
        .all(|p| level.tile_type(p) == Some(TileType::SolidEarth));
    if fits {
        fill_rect(level, rect, tile_type);
    }
    fits
}

/// Wall tiles with at least one floor tile as a cardinal neighbour.
pub fn valid_wall_points<E>(level: &Level<E>) -> Vec<Point> {
    level
        .points_of(TileType::Wall)
        .into_iter()
        .filter(|&p| is_valid_wall_point(level, p))
        .collect()
}

fn is_valid_wall_point<E>(level: &Level<E>, p: Point) -> bool {
    Direction::CARDINAL
        .iter()
        .any(|&d| level.tile_type(p.step(d)) == Some(TileType::Floor))
}

fn carve_centre_room<E, R: Rng>(level: &mut Level<E>, centre: Point, rng: &mut R) {
    let width = rng.random_range(ROOM_SIDE);
    let height = rng.random_range(ROOM_SIDE);
    let outline = Rect::new(
        centre.x - width / 2,
        centre.y - height / 2,
        width + 2,
        height + 2,
    );
    fill_rect(level, outline, TileType::Wall);
    fill_rect(level, outline.interior(), TileType::Floor);
}

fn make_room<E, R: Rng>(level: &mut Level<E>, wall_point: Point, rng: &mut R) -> bool {
    let width = rng.random_range(ROOM_SIDE);
    let height = rng.random_range(ROOM_SIDE);
    Direction::CARDINAL
        .into_iter()
        .any(|dir| carve(level, wall_point, dir, width, height))
}

fn make_corridor<E, R: Rng>(level: &mut Level<E>, wall_point: Point, rng: &mut R) -> bool {
    let length = rng.random_range(CORRIDOR_LENGTH);
    Direction::CARDINAL
        .into_iter()
        .any(|dir| carve(level, wall_point, dir, 1, length))
}

/// Fits an `across × depth` floor area beyond `wall_point` in direction `dir`.
///
/// Coordinates are taken in a frame rotated so that `v` points along `dir`
/// and `u` runs across it; `v = 0` is the row of the wall point. The floor
/// covers `v` in `1..=depth`, flanked by walls and capped at `v = depth + 1`.
/// Only directions leading away from an existing floor are tried, so the
/// resulting door always joins two floors.
fn carve<E>(level: &mut Level<E>, wall_point: Point, dir: Direction, across: i32, depth: i32) -> bool {
    if level.tile_type(wall_point.step(dir.opposite())) != Some(TileType::Floor) {
        return false;
    }

    let side = dir.rotate_clockwise();
    let local = |u: i32, v: i32| wall_point.step_by(side, u).step_by(dir, v);
    let first = -((across - 1) / 2);
    let last = first + across - 1;

    let footprint = Rect::spanning(local(first - 1, 1), local(last + 1, depth + 1));
    if !check_fill_rect(level, footprint, TileType::Wall) {
        return false;
    }
    fill_rect(level, Rect::spanning(local(first, 1), local(last, depth)), TileType::Floor);

    // The seam row is shared with whatever the wall point belongs to; only
    // bare earth is turned into wall so existing doors and floors survive.
    let seam = Rect::spanning(local(first - 1, 0), local(last + 1, 0));
    for p in seam.points() {
        if let Some(tile) = level.tile_mut(p) {
            if tile.tile_type == TileType::SolidEarth {
                tile.tile_type = TileType::Wall;
            }
        }
    }

    level.set_tile_type(wall_point, TileType::ClosedDoor).is_ok()
}
