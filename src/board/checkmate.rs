//! Weak and real checkmate classification.
//!
//! A weak checkmate only looks at the king: it is in check and every
//! neighbouring square is off the board, blocked by its own side, or still
//! attacked after the king steps there. A real checkmate additionally finds
//! no legal move by any piece of that side.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, BoardError, Color, Move};

/// `(d_row, d_col)` offsets tried when the king looks for an escape square.
const KING_NEIGHBOURS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (0, 1),
    (1, 1),
    (1, 0),
    (-1, 1),
];

/// Check and checkmate flags for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KingStatus {
    pub in_check: bool,
    pub weak_checkmate: bool,
    pub real_checkmate: bool,
}

impl Board {
    pub fn is_weak_checkmate(&self, color: Color) -> Result<bool, BoardError> {
        if !self.is_in_check(color)? {
            return Ok(false);
        }
        let king = self.king_square(color)?;
        for (d_row, d_col) in KING_NEIGHBOURS {
            let Some(target) = king.offset(d_row, d_col) else {
                continue;
            };
            let mut trial = self.clone();
            // A refused step leaves the king on its square, still in check.
            trial.apply_move(Move::new(king, target));
            if !trial.is_in_check(color)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn is_real_checkmate(&self, color: Color) -> Result<bool, BoardError> {
        if !self.is_weak_checkmate(color)? {
            return Ok(false);
        }
        Ok(self.find_escape(color)?.is_none())
    }

    /// First legal move for `color`, scanning source squares column by column
    /// (rows ascending within a column), destinations in the same order.
    pub fn find_escape(&self, color: Color) -> Result<Option<Move>, BoardError> {
        for mv in self.square_order_candidates(color) {
            if self.clone().make_valid_move(mv)? {
                return Ok(Some(mv));
            }
        }
        Ok(None)
    }

    pub fn status(&self, color: Color) -> Result<KingStatus, BoardError> {
        Ok(KingStatus {
            in_check: self.is_in_check(color)?,
            weak_checkmate: self.is_weak_checkmate(color)?,
            real_checkmate: self.is_real_checkmate(color)?,
        })
    }

    /// Whether either side is in real checkmate.
    pub fn has_checkmate(&self) -> Result<bool, BoardError> {
        Ok(self.is_real_checkmate(Color::White)? || self.is_real_checkmate(Color::Black)?)
    }
}
