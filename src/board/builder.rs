//! Fluent builder for constructing positions piece by piece.
//!
//! # Example
//! ```
//! use forced_mate::board::{BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse().unwrap(), Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.len(), 3);
//! ```

use super::{Board, BoardError, Color, Piece, PlacedPiece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<PlacedPiece>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|p| p.square != square);
        self.pieces.push(PlacedPiece::new(piece, color, square));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Build the board, keeping placement order as iteration order.
    pub fn build(self) -> Result<Board, BoardError> {
        Board::from_pieces(self.pieces)
    }
}
