//! Board text format parsing and serialization.
//!
//! A board is eight lines of eight characters, top row first:
//! `r` red man, `R` red king, `b` black man, `B` black king, `-` empty.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use super::error::{BoardParseError, LoadError};
use super::{Cell, GameState, Square};

impl GameState {
    /// Parse a board from its text form.
    ///
    /// With `strict` set, the text must be exactly 8 `\n`-terminated rows
    /// of exactly 8 cell characters; a `\r` or any other stray whitespace
    /// is an error. Without it, `\r` line endings, trailing whitespace,
    /// and blank lines are tolerated. An unrecognized cell character is an
    /// error in both modes.
    pub fn from_text(text: &str, strict: bool) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = if strict {
            // Split on '\n' only, so a '\r' stays in the row and fails the
            // length check. A single trailing newline is part of the
            // format, not an extra row.
            let mut rows: Vec<&str> = text.split('\n').collect();
            if rows.last() == Some(&"") {
                rows.pop();
            }
            rows
        } else {
            text.lines()
                .map(str::trim_end)
                .filter(|row| !row.is_empty())
                .collect()
        };

        if rows.len() != 8 {
            return Err(BoardParseError::WrongRowCount { found: rows.len() });
        }

        let mut state = GameState::empty();
        for (row, line) in rows.into_iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 8 {
                return Err(BoardParseError::WrongRowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or(BoardParseError::InvalidCell {
                    char: c,
                    row,
                    col,
                })?;
                state.set_cell(Square(row, col), cell);
            }
        }
        Ok(state)
    }

    /// Load a board from a file.
    ///
    /// Reads the whole file, then parses it with [`GameState::from_text`].
    pub fn from_file<P: AsRef<Path>>(path: P, strict: bool) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let state = GameState::from_text(&text, strict)?;
        debug!("loaded board from {}", path.display());
        Ok(state)
    }

    /// Serialize the board back to its text form.
    ///
    /// Round-trips with [`GameState::from_text`] in both modes.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8 {
            for col in 0..8 {
                out.push(self.cell_at(Square(row, col)).to_char());
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for GameState {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_text(s, true)
    }
}
