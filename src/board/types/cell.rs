//! Cell and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// The other color.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// The contents of one board square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    Empty,
    Red,
    RedKing,
    Black,
    BlackKing,
}

// Red promotes on the bottom row (indices 56-63), black on the top (0-7).
const RED_PROMOTION_START: usize = 56;
const BLACK_PROMOTION_END: usize = 7;

impl Cell {
    /// All cell variants in board-text order
    pub const ALL: [Cell; 5] = [
        Cell::Empty,
        Cell::Red,
        Cell::RedKing,
        Cell::Black,
        Cell::BlackKing,
    ];

    /// Returns true for a red man or red king.
    #[inline]
    #[must_use]
    pub const fn is_red_piece(self) -> bool {
        matches!(self, Cell::Red | Cell::RedKing)
    }

    /// Returns true for a black man or black king.
    #[inline]
    #[must_use]
    pub const fn is_black_piece(self) -> bool {
        matches!(self, Cell::Black | Cell::BlackKing)
    }

    /// Returns true only for `Empty`.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true for a king of either color.
    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::RedKing | Cell::BlackKing)
    }

    /// The color of the piece on this cell, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Red | Cell::RedKing => Some(Color::Red),
            Cell::Black | Cell::BlackKing => Some(Color::Black),
            Cell::Empty => None,
        }
    }

    /// Returns true iff the two cells hold pieces of opposite colors.
    ///
    /// Any pairing involving `Empty` is not an opponent pair.
    #[must_use]
    pub const fn is_opponent(self, other: Cell) -> bool {
        (self.is_red_piece() && other.is_black_piece())
            || (self.is_black_piece() && other.is_red_piece())
    }

    /// Promote a man that has reached its back row, addressed by linear
    /// board index (0-63).
    ///
    /// Red men promote on indices 56-63, black men on 0-7. Kings, empty
    /// cells, and mid-board men are returned unchanged.
    #[must_use]
    pub const fn promote_if_reached_end(self, index: usize) -> Cell {
        match self {
            Cell::Red if index >= RED_PROMOTION_START => Cell::RedKing,
            Cell::Black if index <= BLACK_PROMOTION_END => Cell::BlackKing,
            other => other,
        }
    }

    /// Parse a cell from its board-text character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' => Some(Cell::Empty),
            'r' => Some(Cell::Red),
            'R' => Some(Cell::RedKing),
            'b' => Some(Cell::Black),
            'B' => Some(Cell::BlackKing),
            _ => None,
        }
    }

    /// The board-text character for this cell.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Red => 'r',
            Cell::RedKing => 'R',
            Cell::Black => 'b',
            Cell::BlackKing => 'B',
        }
    }

    /// The display glyph for this cell.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '·',
            Cell::Red => '●',
            Cell::RedKing => '◉',
            Cell::Black => '○',
            Cell::BlackKing => '◎',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
