//! Board model, move rules and the forced-mate search.
//!
//! Pieces live in a small arena kept in setup order; that order drives move
//! enumeration, so the first move reported by a search is deterministic.
//! There is no castling, en passant, promotion or two-square pawn advance.
//!
//! # Example
//! ```
//! use forced_mate::board::{attempt_forced_mate, BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("h5".parse().unwrap(), Color::White, Piece::Queen)
//!     .piece("e8".parse().unwrap(), Color::Black, Piece::King)
//!     .piece("d7".parse().unwrap(), Color::Black, Piece::Pawn)
//!     .piece("e7".parse().unwrap(), Color::Black, Piece::Pawn)
//!     .piece("f7".parse().unwrap(), Color::Black, Piece::Pawn)
//!     .build()
//!     .unwrap();
//!
//! let verdict = attempt_forced_mate(&board, true, 1).unwrap();
//! assert_eq!(verdict.to_string(), "q 8 5 8 8");
//! ```

mod attack_tables;
mod builder;
mod check;
mod checkmate;
mod error;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use checkmate::KingStatus;
pub use error::{BoardError, MoveError, SearchError, SquareError};
pub use movegen::{path, Path};
pub use search::{
    attempt_forced_mate, mating_side, MateSearch, MoveDescriptor, SearchConfig, SearchOutcome,
    Verdict,
};
pub use state::Board;
pub use types::{Color, Move, MoveRule, Piece, PlacedPiece, Square, BOARD_SIZE, COORDS_PER_MOVE};
