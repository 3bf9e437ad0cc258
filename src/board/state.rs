use super::{Cell, Color, Square};

/// An 8x8 checkers board.
///
/// Cells are stored in row-major order, index = `row * 8 + col`, with row 0
/// as the top row of the board text. Red men move toward increasing rows,
/// black men toward decreasing rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) cells: [Cell; 64],
}

impl GameState {
    /// Create the standard initial position: twelve red men on the dark
    /// squares of the top three rows, twelve black men on the dark squares
    /// of the bottom three rows.
    #[must_use]
    pub fn new() -> Self {
        let mut state = GameState::empty();
        for row in 0..3 {
            for col in 0..8 {
                if (row + col) % 2 == 1 {
                    state.set_cell(Square(row, col), Cell::Red);
                }
            }
        }
        for row in 5..8 {
            for col in 0..8 {
                if (row + col) % 2 == 1 {
                    state.set_cell(Square(row, col), Cell::Black);
                }
            }
        }
        state
    }

    /// Create a board with all 64 cells empty.
    #[must_use]
    pub fn empty() -> Self {
        GameState {
            cells: [Cell::Empty; 64],
        }
    }

    /// Read-only view of the 64 cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; 64] {
        &self.cells
    }

    /// The cell at a square.
    #[inline]
    #[must_use]
    pub fn cell_at(&self, sq: Square) -> Cell {
        self.cells[sq.as_index()]
    }

    /// Replace the cell at a square.
    #[inline]
    pub fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.as_index()] = cell;
    }

    /// Count the pieces (men and kings) of one color.
    #[must_use]
    pub fn count_pieces(&self, color: Color) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.color() == Some(color))
            .count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let state = GameState::new();
        assert_eq!(state.count_pieces(Color::Red), 12);
        assert_eq!(state.count_pieces(Color::Black), 12);

        // Pieces only on dark squares
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if (sq.row() + sq.col()) % 2 == 0 {
                assert!(state.cell_at(sq).is_empty(), "light square {sq} occupied");
            }
        }

        // Red at the top, black at the bottom
        assert_eq!(state.cell_at(Square(0, 1)), Cell::Red);
        assert_eq!(state.cell_at(Square(7, 0)), Cell::Black);
        assert!(state.cell_at(Square(3, 3)).is_empty());
    }

    #[test]
    fn test_empty_board() {
        let state = GameState::empty();
        assert_eq!(state.cells().len(), 64);
        assert!(state.cells().iter().all(|cell| cell.is_empty()));
        assert_eq!(state.count_pieces(Color::Red), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut state = GameState::empty();
        state.set_cell(Square(3, 3), Cell::RedKing);
        assert_eq!(state.cell_at(Square(3, 3)), Cell::RedKing);
        assert_eq!(state.cells()[27], Cell::RedKing);
    }
}
