//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    BoardParseError, Cell, Color, GameState, GameStateBuilder, LoadError, Move, MoveList,
    MoveParseError, Square, SquareError,
};
