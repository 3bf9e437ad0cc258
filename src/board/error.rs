//! Error types for checkers board operations.

use std::fmt;
use std::io;

/// Error type for board-text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Board text has the wrong number of rows (needs exactly 8)
    WrongRowCount { found: usize },
    /// A row has the wrong number of cells (needs exactly 8)
    WrongRowLength { row: usize, len: usize },
    /// Unrecognized cell character in board text
    InvalidCell { char: char, row: usize, col: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongRowCount { found } => {
                write!(f, "Board must have exactly 8 rows, found {found}")
            }
            BoardParseError::WrongRowLength { row, len } => {
                write!(f, "Row {row} must have exactly 8 cells, found {len}")
            }
            BoardParseError::InvalidCell { char, row, col } => {
                write!(f, "Invalid cell character '{char}' at row {row}, col {col}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

/// Error type for loading a board from a file
#[derive(Debug)]
pub enum LoadError {
    /// Reading the file failed
    Io(io::Error),
    /// The file contents were not a valid board
    Parse(BoardParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "Failed to read board file: {err}"),
            LoadError::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<BoardParseError> for LoadError {
    fn from(err: BoardParseError) -> Self {
        LoadError::Parse(err)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid coordinate label (must be column letter A-H then row digit 1-8)
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move parsing and application failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
