//! Move application.

use log::trace;

use super::error::MoveParseError;
use super::{Cell, GameState, Move, Square};

impl GameState {
    /// Parse a move in coordinate notation (e.g., "D4-E5", "D4xF6").
    ///
    /// The separator is optional and case-insensitive; `x` marks a jump but
    /// the parsed move is matched against the legal moves of the source
    /// square, so the separator carries no weight beyond readability.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = notation.chars().collect();
        let (from_str, to_str) = match chars.len() {
            4 => (&chars[0..2], &chars[2..4]),
            5 if matches!(chars[2], '-' | 'x' | 'X') => (&chars[0..2], &chars[3..5]),
            len => return Err(MoveParseError::InvalidLength { len }),
        };

        let from: Square = from_str
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            })?;
        let to: Square = to_str
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            })?;

        // Find the matching legal move
        for legal_move in &self.moves_from_square(from) {
            if legal_move.from() == from && legal_move.to() == to {
                return Ok(*legal_move);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })
    }

    /// Apply a move: relocate the piece, remove the jumped piece if any,
    /// and promote a man that reached its back row.
    ///
    /// The move is validated against the legal moves of its source square;
    /// the board is unchanged on error.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveParseError> {
        if !self.moves_from_square(mv.from()).contains(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }

        let cell = self.cell_at(mv.from());
        self.set_cell(mv.from(), Cell::Empty);
        if let Some(captured) = mv.captured_square() {
            self.set_cell(captured, Cell::Empty);
        }
        self.set_cell(mv.to(), cell.promote_if_reached_end(mv.to().as_index()));

        trace!("applied {mv}");
        Ok(())
    }

    /// Parse a move in coordinate notation and apply it in one call.
    pub fn apply_move_notation(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.apply_move(mv)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, GameStateBuilder};

    #[test]
    fn test_apply_step() {
        let mut state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .build();
        let mv = state.parse_move("D4-E5").unwrap();
        state.apply_move(mv).unwrap();

        assert!(state.cell_at(Square(3, 3)).is_empty());
        assert_eq!(state.cell_at(Square(4, 4)), Cell::Red);
    }

    #[test]
    fn test_apply_jump_removes_captured() {
        let mut state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .piece(Square(4, 4), Cell::Black)
            .build();
        assert_eq!(state.count_pieces(Color::Black), 1);

        let mv = state.apply_move_notation("D4xF6").unwrap();
        assert!(mv.is_jump());
        assert_eq!(state.count_pieces(Color::Black), 0);
        assert!(state.cell_at(Square(4, 4)).is_empty());
        assert_eq!(state.cell_at(Square(5, 5)), Cell::Red);
    }

    #[test]
    fn test_apply_promotes() {
        let mut state = GameStateBuilder::new()
            .piece(Square(6, 2), Cell::Red)
            .build();
        state.apply_move_notation("C7-D8").unwrap();
        assert_eq!(state.cell_at(Square(7, 3)), Cell::RedKing);
    }

    #[test]
    fn test_apply_black_promotes() {
        let mut state = GameStateBuilder::new()
            .piece(Square(1, 2), Cell::Black)
            .build();
        state.apply_move_notation("C2-B1").unwrap();
        assert_eq!(state.cell_at(Square(0, 1)), Cell::BlackKing);
    }

    #[test]
    fn test_apply_illegal_leaves_state_unchanged() {
        let mut state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .build();
        let before = state.clone();

        // Backward for a red man
        let result = state.apply_move(Move::step(Square(3, 3), Square(2, 2)));
        assert!(matches!(result, Err(MoveParseError::IllegalMove { .. })));
        assert_eq!(state, before);
    }

    #[test]
    fn test_parse_move_errors() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .build();
        assert!(matches!(
            state.parse_move("D4"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            state.parse_move("Z9-A1"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            state.parse_move("D4-D5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_move_compact_and_lowercase() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .build();
        assert_eq!(state.parse_move("d4e5").unwrap().to(), Square(4, 4));
        assert_eq!(state.parse_move("d4-e5").unwrap().to(), Square(4, 4));
    }

    #[test]
    fn test_multi_jump_continuation() {
        let mut state = GameStateBuilder::new()
            .piece(Square(1, 1), Cell::Red)
            .piece(Square(2, 2), Cell::Black)
            .piece(Square(4, 4), Cell::Black)
            .build();

        let first = state.apply_move_notation("B2xD4").unwrap();
        assert!(state.has_jump_from(first.to()));

        state.apply_move_notation("D4xF6").unwrap();
        assert!(!state.has_jump_from(Square(5, 5)));
        assert_eq!(state.count_pieces(Color::Black), 0);
    }
}
