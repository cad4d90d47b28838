//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveError;

/// Number of coordinates describing one move.
pub const COORDS_PER_MOVE: usize = 4;

/// A move query: source and destination square, relative to one board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Build a move from `[from_col, from_row, to_col, to_row]`.
    pub fn from_coords(coords: &[i32]) -> Result<Self, MoveError> {
        if coords.len() != COORDS_PER_MOVE {
            return Err(MoveError::WrongCoordinateCount {
                found: coords.len(),
            });
        }
        let square = |col: i32, row: i32| {
            Square::new(row, col).ok_or(MoveError::OffBoard { row, col })
        };
        Ok(Move {
            from: square(coords[0], coords[1])?,
            to: square(coords[2], coords[3])?,
        })
    }

    /// Split a flat coordinate list into moves of four coordinates each.
    pub fn sequence_from_coords(coords: &[i32]) -> Result<Vec<Self>, MoveError> {
        if coords.is_empty() || coords.len() % COORDS_PER_MOVE != 0 {
            return Err(MoveError::WrongCoordinateCount {
                found: coords.len(),
            });
        }
        coords
            .chunks(COORDS_PER_MOVE)
            .map(Move::from_coords)
            .collect()
    }

    /// Coordinates in `[from_col, from_row, to_col, to_row]` order.
    #[must_use]
    pub fn to_coords(self) -> [i32; COORDS_PER_MOVE] {
        [
            self.from.col(),
            self.from.row(),
            self.to.col(),
            self.to.row(),
        ]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
