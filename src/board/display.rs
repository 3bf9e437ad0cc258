//! Human-readable board rendering.

use std::fmt;

use super::{GameState, Square};

impl fmt::Display for GameState {
    /// Render the board as a grid: a header of column letters, then the
    /// eight rows top to bottom, each prefixed with its row digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for row in 0..8 {
            write!(f, "{}", row + 1)?;
            for col in 0..8 {
                write!(f, " {}", self.cell_at(Square(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
