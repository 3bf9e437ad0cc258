//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than writing board text.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Cell, GameStateBuilder, Square};
//!
//! let state = GameStateBuilder::new()
//!     .piece(Square(3, 3), Cell::Red)
//!     .piece(Square(4, 4), Cell::Black)
//!     .build();
//! assert!(state.moves_from("D4").has_jump());
//! ```

use super::{Cell, GameState, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug, Default)]
pub struct GameStateBuilder {
    pieces: Vec<(Square, Cell)>,
}

impl GameStateBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let state = GameState::new();
        let pieces = (0..64)
            .map(Square::from_index)
            .filter(|sq| !state.cell_at(*sq).is_empty())
            .map(|sq| (sq, state.cell_at(sq)))
            .collect();
        GameStateBuilder { pieces }
    }

    /// Place a cell on the board, replacing any earlier placement there.
    #[must_use]
    pub fn piece(mut self, square: Square, cell: Cell) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, cell));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut state = GameState::empty();
        for (square, cell) in self.pieces {
            state.set_cell(square, cell);
        }
        state
    }
}
