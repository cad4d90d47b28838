//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Raw move application and legal moves
//! - `check.rs` - Check detection
//! - `checkmate.rs` - Weak and real checkmate
//! - `search.rs` - Forced-mate search, sequential and parallel
//! - `proptest.rs` - Property-based tests

mod proptest;
mod search;

use crate::board::{Board, BoardBuilder, Color, Piece, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Build a board from `(square, color, piece)` triples, in order.
pub(super) fn board(pieces: &[(&str, Color, Piece)]) -> Board {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |builder, &(square, color, piece)| {
            builder.piece(sq(square), color, piece)
        })
        .build()
        .unwrap()
}
