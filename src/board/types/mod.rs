//! Core chess types.
//!
//! - `Piece`, `Color`, `MoveRule` and `PlacedPiece` - piece identity and movement shape
//! - `Square` - 1-based board coordinate
//! - `Move` - a from/to query against one board

mod moves;
mod piece;
mod square;

pub use moves::{Move, COORDS_PER_MOVE};
pub use piece::{Color, MoveRule, Piece, PlacedPiece};
pub use square::{Square, BOARD_SIZE};
