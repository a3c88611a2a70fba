// src/dungeon/src/rooms.rs

use crate::geometry::Point;

/// Axis-aligned rectangle of tiles, the unit of room and corridor placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The smallest rectangle containing both corner points.
    pub fn spanning(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs() + 1, (a.y - b.y).abs() + 1)
    }

    /// The rectangle shrunk by one tile on every side.
    pub fn interior(&self) -> Self {
        Self::new(self.x + 1, self.y + 1, self.width - 2, self.height - 2)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        let Rect {
            x,
            y,
            width,
            height,
        } = *self;
        (x..x + width).flat_map(move |i| (y..y + height).map(move |j| Point::new(i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanning_normalises_corners() {
        let r = Rect::spanning(Point::new(5, 1), Point::new(2, 4));
        assert_eq!(r, Rect::new(2, 1, 4, 4));
        assert_eq!(r.points().count(), 16);
        assert_eq!(r.interior(), Rect::new(3, 2, 2, 2));
    }
}
