//! Error types for board, move and search operations.

use std::fmt;

use super::{Color, Square};

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 1-8)
    RowOutOfBounds { row: i32 },
    /// Column out of bounds (must be 1-8)
    ColOutOfBounds { col: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 1-8)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Board invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No king of this color on the board
    MissingKing { color: Color },
    /// More than one king of this color
    DuplicateKing { color: Color },
    /// Two pieces placed on the same square
    SquareOccupied { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => write!(f, "{color} king is missing"),
            BoardError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
            BoardError::SquareOccupied { square } => {
                write!(f, "Square {square} is already occupied")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for malformed move requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A move needs exactly four coordinates (a sequence, a multiple of four)
    WrongCoordinateCount { found: usize },
    /// Coordinate pair outside the board
    OffBoard { row: i32, col: i32 },
    /// The board the move was applied to is inconsistent
    Board(BoardError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::WrongCoordinateCount { found } => {
                write!(f, "Move needs 4 coordinates per move, found {found}")
            }
            MoveError::OffBoard { row, col } => {
                write!(f, "Coordinates (col {col}, row {row}) are off the board")
            }
            MoveError::Board(e) => write!(f, "Invalid board: {e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(e: BoardError) -> Self {
        MoveError::Board(e)
    }
}

/// Error type for mate search failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The searched position violates a board invariant
    Board(BoardError),
    /// The search visited more nodes than allowed
    NodeLimitExceeded { limit: u64 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Board(e) => write!(f, "Invalid board: {e}"),
            SearchError::NodeLimitExceeded { limit } => {
                write!(f, "Search exceeded the node limit of {limit}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Board(e) => Some(e),
            SearchError::NodeLimitExceeded { .. } => None,
        }
    }
}

impl From<BoardError> for SearchError {
    fn from(e: BoardError) -> Self {
        SearchError::Board(e)
    }
}
