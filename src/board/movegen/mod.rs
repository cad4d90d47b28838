//! Move geometry, raw move application and legality.
//!
//! `path` answers whether a piece can reach a square at all and which squares
//! must be empty on the way. `Board::apply_move` executes a move using only
//! that geometry and capture color rules; `Board::make_valid_move` adds the
//! king-safety checks on top.

mod apply;
mod kings;
mod knights;
mod legal;
mod pawns;
mod sliders;

use super::{Color, MoveRule, Piece, PlacedPiece, Square};

/// Squares that must be empty for a move to go through.
pub type Path = &'static [Square];

/// Path for non-sliding pieces.
pub(crate) const NO_PATH: Path = &[];

/// Geometry of a move for one piece kind.
///
/// Returns `None` when `to` is not reachable by the piece's movement shape,
/// otherwise the squares strictly between `from` and `to` that must be empty.
/// With `attack_only` set, pawn forward steps are excluded since pawns only
/// attack diagonally.
#[must_use]
pub fn path(piece: Piece, color: Color, from: Square, to: Square, attack_only: bool) -> Option<Path> {
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    match piece.move_rule() {
        MoveRule::Step => kings::step_path(d_row, d_col),
        MoveRule::Leap => knights::leap_path(d_row, d_col),
        MoveRule::Slide { straight, diagonal } => {
            sliders::slide_path(from, to, straight, diagonal)
        }
        MoveRule::Pawn => pawns::pawn_path(color, d_row, d_col, attack_only),
    }
}

impl PlacedPiece {
    /// Geometry of moving this piece to `to`, see [`path`].
    #[inline]
    #[must_use]
    pub fn path_to(&self, to: Square, attack_only: bool) -> Option<Path> {
        path(self.piece, self.color, self.square, to, attack_only)
    }

    /// Whether `target` lies on this piece's attack shape. Blocking pieces
    /// are not considered.
    #[inline]
    #[must_use]
    pub fn is_attacking(&self, target: Square) -> bool {
        self.path_to(target, true).is_some()
    }
}
