//! Checkers board representation and game logic.
//!
//! The board is a flat array of 64 cells in row-major order, loaded from a
//! simple 8x8 text format. Move generation follows standard checkers rules:
//! men step diagonally forward, kings in all four diagonal directions, and
//! captures are forced when a jump is available.
//!
//! # Example
//! ```
//! use checkers_engine::board::GameState;
//!
//! let state = GameState::new();
//! let moves = state.generate_moves(checkers_engine::board::Color::Black);
//! println!("Black has {} opening moves", moves.len());
//! ```

mod builder;
mod display;
mod error;
mod make_move;
mod movegen;
mod parse;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameStateBuilder;
pub use error::{BoardParseError, LoadError, MoveParseError, SquareError};
pub use state::GameState;
pub use types::{Cell, Color, Move, MoveList, MoveListIntoIter, Square};
