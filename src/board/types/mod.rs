//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Cell` and `Color` - square contents and piece colors
//! - `Square` - board coordinate with label notation (A1-H8)
//! - `Move` and `MoveList` - move representation

mod cell;
mod moves;
mod square;

// Re-export all public types
pub use cell::{Cell, Color};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use square::Square;
