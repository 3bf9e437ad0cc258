//! Legal move generation.
//!
//! Men step and jump diagonally forward (red toward increasing rows, black
//! toward decreasing rows); kings use all four diagonal directions. When a
//! jump is available it is forced: per piece for square-addressed queries,
//! per side for whole-side generation.

use super::{Cell, Color, GameState, Move, MoveList, Square};

const DOWNWARD: [(i32, i32); 2] = [(1, -1), (1, 1)];
const UPWARD: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
const ALL_DIAGONALS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Movement directions for a piece. Empty cells have none.
fn directions(cell: Cell) -> &'static [(i32, i32)] {
    match cell {
        Cell::Red => &DOWNWARD,
        Cell::Black => &UPWARD,
        Cell::RedKing | Cell::BlackKing => &ALL_DIAGONALS,
        Cell::Empty => &[],
    }
}

impl GameState {
    /// Legal moves for the piece at a coordinate label such as `"D4"`.
    ///
    /// Total over all inputs: an unparsable label or an empty square yields
    /// an empty list, never an error.
    #[must_use]
    pub fn moves_from(&self, label: &str) -> MoveList {
        match label.parse::<Square>() {
            Ok(sq) => self.moves_from_square(sq),
            Err(_) => MoveList::new(),
        }
    }

    /// Legal moves for the piece at a square.
    ///
    /// When the piece has at least one jump, only its jumps are returned.
    #[must_use]
    pub fn moves_from_square(&self, sq: Square) -> MoveList {
        let jumps = self.jumps_from_square(sq);
        if jumps.is_empty() {
            self.steps_from_square(sq)
        } else {
            jumps
        }
    }

    /// All legal moves for one side.
    ///
    /// When any piece of the side can jump, only jump moves are returned.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        let mut jumps = MoveList::new();
        let mut steps = MoveList::new();

        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if self.cells[idx].color() != Some(color) {
                continue;
            }
            for mv in &self.jumps_from_square(sq) {
                jumps.push(*mv);
            }
            if jumps.is_empty() {
                for mv in &self.steps_from_square(sq) {
                    steps.push(*mv);
                }
            }
        }

        if jumps.is_empty() {
            steps
        } else {
            jumps
        }
    }

    /// Whether the piece at a square has a jump available.
    #[must_use]
    pub fn has_jump_from(&self, sq: Square) -> bool {
        !self.jumps_from_square(sq).is_empty()
    }

    fn steps_from_square(&self, sq: Square) -> MoveList {
        let mut moves = MoveList::new();
        let cell = self.cell_at(sq);

        for &(drow, dcol) in directions(cell) {
            if let Some(to) = sq.offset(drow, dcol) {
                if self.cell_at(to).is_empty() {
                    moves.push(self.flag_promotion(cell, Move::step(sq, to)));
                }
            }
        }
        moves
    }

    fn jumps_from_square(&self, sq: Square) -> MoveList {
        let mut moves = MoveList::new();
        let cell = self.cell_at(sq);

        for &(drow, dcol) in directions(cell) {
            let over = sq.offset(drow, dcol);
            let to = sq.offset(2 * drow, 2 * dcol);
            if let (Some(over), Some(to)) = (over, to) {
                if cell.is_opponent(self.cell_at(over)) && self.cell_at(to).is_empty() {
                    moves.push(self.flag_promotion(cell, Move::jump(sq, to)));
                }
            }
        }
        moves
    }

    /// Flag moves that land a man on its promotion row.
    fn flag_promotion(&self, cell: Cell, mv: Move) -> Move {
        if !cell.is_king() && cell.promote_if_reached_end(mv.to().as_index()) != cell {
            mv.with_promotion()
        } else {
            mv
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameStateBuilder;

    #[test]
    fn test_lone_red_man_center() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .build();
        let moves = state.moves_from("D4");
        assert_eq!(moves.len(), 2);
        // Red moves toward increasing rows
        assert!(moves.contains(Move::step(Square(3, 3), Square(4, 2))));
        assert!(moves.contains(Move::step(Square(3, 3), Square(4, 4))));
    }

    #[test]
    fn test_lone_black_man_center() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Black)
            .build();
        let moves = state.moves_from_square(Square(3, 3));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(Move::step(Square(3, 3), Square(2, 2))));
        assert!(moves.contains(Move::step(Square(3, 3), Square(2, 4))));
    }

    #[test]
    fn test_king_moves_all_directions() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::RedKing)
            .build();
        assert_eq!(state.moves_from_square(Square(3, 3)).len(), 4);
    }

    #[test]
    fn test_edge_of_board() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 0), Cell::Red)
            .build();
        let moves = state.moves_from_square(Square(3, 0));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), Square(4, 1));
    }

    #[test]
    fn test_blocked_by_own_piece() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .piece(Square(4, 4), Cell::Red)
            .build();
        let moves = state.moves_from_square(Square(3, 3));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), Square(4, 2));
    }

    #[test]
    fn test_jump_is_forced_for_piece() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .piece(Square(4, 4), Cell::Black)
            .build();
        let moves = state.moves_from_square(Square(3, 3));
        assert_eq!(moves.len(), 1);
        let mv = moves[0];
        assert!(mv.is_jump());
        assert_eq!(mv.to(), Square(5, 5));
        assert_eq!(mv.captured_square(), Some(Square(4, 4)));
    }

    #[test]
    fn test_no_jump_over_own_piece() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .piece(Square(4, 4), Cell::RedKing)
            .build();
        let moves = state.moves_from_square(Square(3, 3));
        assert!(!moves.has_jump());
    }

    #[test]
    fn test_no_jump_with_blocked_landing() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .piece(Square(4, 4), Cell::Black)
            .piece(Square(5, 5), Cell::Black)
            .build();
        let moves = state.moves_from_square(Square(3, 3));
        assert_eq!(moves.len(), 1);
        assert!(!moves[0].is_jump());
        assert_eq!(moves[0].to(), Square(4, 2));
    }

    #[test]
    fn test_man_does_not_jump_backward() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .piece(Square(2, 2), Cell::Black)
            .build();
        let moves = state.moves_from_square(Square(3, 3));
        assert!(!moves.has_jump());
    }

    #[test]
    fn test_king_jumps_backward() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::RedKing)
            .piece(Square(2, 2), Cell::Black)
            .build();
        let moves = state.moves_from_square(Square(3, 3));
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_jump());
        assert_eq!(moves[0].to(), Square(1, 1));
    }

    #[test]
    fn test_side_wide_forced_capture() {
        let state = GameStateBuilder::new()
            .piece(Square(3, 3), Cell::Red)
            .piece(Square(4, 4), Cell::Black)
            .piece(Square(0, 1), Cell::Red)
            .build();
        let moves = state.generate_moves(Color::Red);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_jump());
        assert_eq!(moves[0].from(), Square(3, 3));
    }

    #[test]
    fn test_promotion_flagged() {
        let state = GameStateBuilder::new()
            .piece(Square(6, 2), Cell::Red)
            .build();
        let moves = state.moves_from_square(Square(6, 2));
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.is_promotion()));

        let king = GameStateBuilder::new()
            .piece(Square(6, 2), Cell::RedKing)
            .build();
        let king_moves = king.moves_from_square(Square(6, 2));
        assert!(king_moves.iter().all(|mv| !mv.is_promotion()));
    }

    #[test]
    fn test_empty_and_invalid_sources() {
        let state = GameState::empty();
        assert!(state.moves_from("D4").is_empty());
        assert!(state.moves_from("Z9").is_empty());
        assert!(state.moves_from("").is_empty());
        assert!(state.moves_from("D44").is_empty());
    }

    #[test]
    fn test_initial_position_opening_moves() {
        let state = GameState::new();
        let red = state.generate_moves(Color::Red);
        let black = state.generate_moves(Color::Black);
        assert_eq!(red.len(), 7);
        assert_eq!(black.len(), 7);
        assert!(!red.has_jump());
    }
}
