// src/dungeon/src/geometry.rs

use serde::{Deserialize, Serialize};

/// A grid coordinate. `x` grows to the east, `y` grows to the north.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        self.step_by(dir, 1)
    }

    /// The point `amount` steps away in `dir`.
    pub fn step_by(self, dir: Direction, amount: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx * amount, self.y + dy * amount)
    }

    /// Manhattan distance, the pathfinder's remaining-cost estimate.
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance (king moves).
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// The direction leading from `self` to an adjacent `other`.
    pub fn direction_to(self, other: Point) -> Option<Direction> {
        Direction::from_delta(other.x - self.x, other.y - self.y)
    }

    pub fn as_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The eight compass directions an entity can move in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Unit vectors indexed by `Direction as usize`.
const DELTAS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Cardinal directions in the order the generator tries them.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        DELTAS[self as usize]
    }

    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        DELTAS
            .iter()
            .position(|&d| d == (dx, dy))
            .map(|i| Self::ALL[i])
    }

    pub fn opposite(self) -> Direction {
        Self::ALL[(self as usize + 4) % 8]
    }

    /// Rotates a quarter turn clockwise (North -> East).
    pub fn rotate_clockwise(self) -> Direction {
        Self::ALL[(self as usize + 2) % 8]
    }

    pub fn is_cardinal(self) -> bool {
        (self as usize) % 2 == 0
    }
}
