//! Board storage and row clearing.
//!
//! The grid is 10x25 with the top rows doubling as the spawn buffer.
//! Rows are stored as fixed arrays so clearing a row is a rotate of the
//! row slice above it, with no allocation. Each cell records the kind of
//! the piece that locked there; occupancy and render color are the same
//! lookup, so a cell cannot be occupied without a color.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

#[cfg(test)]
use crate::types::PieceKind;

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

type Row = [Cell; W];

/// The playfield. Coordinates are (x, y), x growing right and y growing
/// down; (0, 0) is the top-left visible cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: [Row; H],
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [[None; W]; H],
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    fn in_bounds(x: i8, y: i8) -> bool {
        (0..W as i8).contains(&x) && (0..H as i8).contains(&y)
    }

    /// Cell at (x, y), or None when the position is off the board
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if Self::in_bounds(x, y) {
            Some(self.rows[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Write a cell; out-of-bounds writes are rejected and return false
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if Self::in_bounds(x, y) {
            self.rows[y as usize][x as usize] = cell;
            true
        } else {
            false
        }
    }

    /// True when (x, y) holds a locked cell. Off-board positions read as
    /// free; callers wall-check separately.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < H && self.rows[y].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row. Rows above a cleared row drop by one and an
    /// empty row enters at the top. The scan walks bottom to top and
    /// revisits an index after clearing it, since the row that just
    /// dropped in may itself be full. Returns the number of rows removed
    /// (at most 4 per lock).
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = H;
        while y > 0 {
            if self.is_row_full(y - 1) {
                cleared += 1;
                self.rows[..y].rotate_right(1);
                self.rows[0] = [None; W];
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of locked cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.rows = [[None; W]; H];
    }

    /// Fill a whole row with the given kind (test setup helper)
    #[cfg(test)]
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Some(kind));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();

        assert!(board.set(0, 0, Some(PieceKind::I)));
        assert!(board.set(5, 12, Some(PieceKind::T)));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 12), Some(Some(PieceKind::T)));

        assert!(board.set(5, 12, None));
        assert_eq!(board.get(5, 12), Some(None));
    }

    #[test]
    fn test_bounds_checks() {
        let mut board = Board::new();
        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 25)] {
            assert_eq!(board.get(x, y), None);
            assert!(!board.set(x, y, Some(PieceKind::T)));
            assert!(!board.is_occupied(x, y));
        }
    }

    #[test]
    fn test_is_row_full() {
        let mut board = Board::new();
        assert!(!board.is_row_full(24));

        board.fill_row(24, PieceKind::I);
        assert!(board.is_row_full(24));

        board.set(3, 24, None);
        assert!(!board.is_row_full(24));

        // Out-of-range row index is simply not full
        assert!(!board.is_row_full(25));
    }

    #[test]
    fn test_clear_single_row_shifts_above() {
        let mut board = Board::new();
        board.fill_row(24, PieceKind::I);
        board.set(0, 23, Some(PieceKind::T));

        assert_eq!(board.clear_full_rows(), 1);

        // The cell from row 23 moved down into row 24
        assert_eq!(board.get(0, 24), Some(Some(PieceKind::T)));
        assert_eq!(board.get(0, 23), Some(None));
        assert!(!board.is_row_full(24));
    }

    #[test]
    fn test_clear_removes_exactly_width_cells_per_row() {
        let mut board = Board::new();
        board.fill_row(24, PieceKind::I);
        board.fill_row(23, PieceKind::O);
        board.set(4, 22, Some(PieceKind::S));

        let before = board.occupied_count();
        let cleared = board.clear_full_rows();

        assert_eq!(cleared, 2);
        assert_eq!(
            board.occupied_count(),
            before - (cleared as usize) * (BOARD_WIDTH as usize)
        );
        // Survivor shifted down by two
        assert_eq!(board.get(4, 24), Some(Some(PieceKind::S)));
    }

    #[test]
    fn test_clear_non_adjacent_full_rows() {
        let mut board = Board::new();
        board.fill_row(24, PieceKind::I);
        board.set(2, 23, Some(PieceKind::J));
        board.fill_row(22, PieceKind::L);

        assert_eq!(board.clear_full_rows(), 2);

        // Partial row 23 is the only survivor, now on the bottom
        assert_eq!(board.get(2, 24), Some(Some(PieceKind::J)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_clear_four_rows_at_once() {
        let mut board = Board::new();
        for y in 21..25 {
            board.fill_row(y, PieceKind::I);
        }

        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_clear_empty_board_is_noop() {
        let mut board = Board::new();
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_clear_board() {
        let mut board = Board::new();
        board.fill_row(10, PieceKind::Z);
        board.clear();
        assert_eq!(board.occupied_count(), 0);
    }
}
