//! The 7×7 grid and its fixed starting layout.
//!
//! The board is a total mapping: every one of the 49 cells always holds
//! exactly one value (`None` for empty). The starting layout is fixed:
//!
//! ```text
//! W W . . . B B
//! W W . R . B B
//! . . R R R . .
//! . R R R R R .
//! . . R R R . .
//! B B . R . W W
//! B B . . . W W
//! ```
//!
//! White owns the top-left and bottom-right 2×2 blocks, Black the other
//! two corners, and 13 Red marbles form a cross with diagonals around the
//! center cell (3,3).

use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_SIZE};
use super::marble::Marble;

/// The 7×7 Kuba board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Marble>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with the fixed Kuba starting layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Self::empty();

        // 2x2 corner blocks, mirrored diagonally per color.
        board.fill_corner(0, 0, Marble::White);
        board.fill_corner(5, 5, Marble::White);
        board.fill_corner(0, 5, Marble::Black);
        board.fill_corner(5, 0, Marble::Black);

        // Red cross centered on (3,3): axes out to distance 2, plus the
        // four diagonal neighbors of the center.
        let center = (3i32, 3i32);
        let red_offsets = [
            (0, 0),
            (-1, 0),
            (-2, 0),
            (1, 0),
            (2, 0),
            (0, -1),
            (0, -2),
            (0, 1),
            (0, 2),
            (1, 1),
            (-1, -1),
            (1, -1),
            (-1, 1),
        ];
        for (dr, dc) in red_offsets {
            let row = (center.0 + dr) as usize;
            let col = (center.1 + dc) as usize;
            board.cells[row][col] = Some(Marble::Red);
        }

        board
    }

    /// Create a fully empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn fill_corner(&mut self, row: usize, col: usize, marble: Marble) {
        for r in row..row + 2 {
            for c in col..col + 2 {
                self.cells[r][c] = Some(marble);
            }
        }
    }

    /// The marble at a cell, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Marble> {
        self.cells[coord.row()][coord.col()]
    }

    /// Overwrite a cell.
    pub(crate) fn set(&mut self, coord: Coord, cell: Option<Marble>) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Count marbles of one kind currently on the board.
    #[must_use]
    pub fn count(&self, marble: Marble) -> usize {
        Coord::all()
            .filter(|&c| self.get(c) == Some(marble))
            .count()
    }

    /// Counts of (White, Black, Red) marbles currently on the board.
    #[must_use]
    pub fn marble_count(&self) -> (usize, usize, usize) {
        (
            self.count(Marble::White),
            self.count(Marble::Black),
            self.count(Marble::Red),
        )
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(m) => write!(f, "{} ", m)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(board: &Board, row: usize, col: usize) -> Option<Marble> {
        board.get(Coord::new(row, col).unwrap())
    }

    #[test]
    fn test_starting_counts() {
        let board = Board::starting_position();
        assert_eq!(board.marble_count(), (8, 8, 13));
    }

    #[test]
    fn test_starting_corners() {
        let board = Board::starting_position();
        for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1), (5, 5), (5, 6), (6, 5), (6, 6)] {
            assert_eq!(at(&board, r, c), Some(Marble::White), "white at ({r},{c})");
        }
        for (r, c) in [(0, 5), (0, 6), (1, 5), (1, 6), (5, 0), (5, 1), (6, 0), (6, 1)] {
            assert_eq!(at(&board, r, c), Some(Marble::Black), "black at ({r},{c})");
        }
    }

    #[test]
    fn test_starting_red_cross() {
        let board = Board::starting_position();
        let reds = [
            (3, 3),
            (1, 3),
            (2, 3),
            (4, 3),
            (5, 3),
            (3, 1),
            (3, 2),
            (3, 4),
            (3, 5),
            (2, 2),
            (2, 4),
            (4, 2),
            (4, 4),
        ];
        for (r, c) in reds {
            assert_eq!(at(&board, r, c), Some(Marble::Red), "red at ({r},{c})");
        }
    }

    #[test]
    fn test_starting_empty_cells() {
        let board = Board::starting_position();
        let occupied = 8 + 8 + 13;
        let empty = Coord::all().filter(|&c| board.get(c).is_none()).count();
        assert_eq!(empty, 49 - occupied);
        // Spot-check a few cells the layout leaves open.
        assert_eq!(at(&board, 0, 3), None);
        assert_eq!(at(&board, 3, 0), None);
        assert_eq!(at(&board, 6, 3), None);
    }

    #[test]
    fn test_set_get() {
        let mut board = Board::empty();
        let c = Coord::new(2, 2).unwrap();
        board.set(c, Some(Marble::Red));
        assert_eq!(board.get(c), Some(Marble::Red));
        board.set(c, None);
        assert_eq!(board.get(c), None);
    }

    #[test]
    fn test_display_shape() {
        let rendered = Board::starting_position().to_string();
        assert_eq!(rendered.lines().count(), 7);
        assert!(rendered.starts_with("W W . . . B B"));
    }

    #[test]
    fn test_serialization() {
        let board = Board::starting_position();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
