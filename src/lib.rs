pub mod board;

pub use board::{Cell, Color, GameState, Move, MoveList, Square};
