//! Board coordinates and push directions.
//!
//! ## Coord
//!
//! A cell address on the 7×7 grid. Construction is checked: a `Coord`
//! always names a real cell, so the board never sees an out-of-range
//! index. Off-board arithmetic is expressed through `Option` instead.
//!
//! ## Direction
//!
//! The four axis-aligned push directions. `Forward` pushes toward row 0,
//! `Backward` toward row 6, `Left` toward column 0, `Right` toward
//! column 6.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 7;

/// A cell coordinate on the 7×7 board.
///
/// Both components are guaranteed to be in `[0, 6]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, or `None` if either component is off the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0-based, 0 is the top edge).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-based, 0 is the left edge).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The neighboring cell one step in `direction`, or `None` past the edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over every cell on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Coord {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A push direction relative to the fixed board orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0 (the top edge).
    Forward,
    /// Toward row 6 (the bottom edge).
    Backward,
    /// Toward column 0.
    Left,
    /// Toward column 6.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(row, col)` delta of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction a pushed line recoils from.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_new_in_range() {
        let c = Coord::new(3, 4).unwrap();
        assert_eq!(c.row(), 3);
        assert_eq!(c.col(), 4);
    }

    #[test]
    fn test_coord_new_out_of_range() {
        assert!(Coord::new(7, 0).is_none());
        assert!(Coord::new(0, 7).is_none());
        assert!(Coord::new(100, 100).is_none());
    }

    #[test]
    fn test_step_interior() {
        let c = Coord::new(3, 3).unwrap();
        assert_eq!(c.step(Direction::Forward), Coord::new(2, 3));
        assert_eq!(c.step(Direction::Backward), Coord::new(4, 3));
        assert_eq!(c.step(Direction::Left), Coord::new(3, 2));
        assert_eq!(c.step(Direction::Right), Coord::new(3, 4));
    }

    #[test]
    fn test_step_off_edge() {
        assert_eq!(Coord::new(0, 3).unwrap().step(Direction::Forward), None);
        assert_eq!(Coord::new(6, 3).unwrap().step(Direction::Backward), None);
        assert_eq!(Coord::new(3, 0).unwrap().step(Direction::Left), None);
        assert_eq!(Coord::new(3, 6).unwrap().step(Direction::Right), None);
    }

    #[test]
    fn test_opposite() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_all_cells() {
        let cells: Vec<_> = Coord::all().collect();
        assert_eq!(cells.len(), 49);
        assert_eq!(cells[0], Coord::new(0, 0).unwrap());
        assert_eq!(cells[48], Coord::new(6, 6).unwrap());
    }

    #[test]
    fn test_serialization() {
        let c = Coord::new(2, 5).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
