use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::{Color, Move, Piece};

/// The first move of a forced mate, as reported to the puzzle writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveDescriptor {
    pub piece: Piece,
    pub color: Color,
    pub mv: Move,
}

impl fmt::Display for MoveDescriptor {
    /// `<piece> <from col> <from row> <to col> <to row>`, piece in puzzle
    /// notation (lowercase for White).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [from_col, from_row, to_col, to_row] = self.mv.to_coords();
        write!(
            f,
            "{} {from_col} {from_row} {to_col} {to_row}",
            self.piece.to_puzzle_char(self.color)
        )
    }
}

/// Result of a forced-mate search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    /// The attacker cannot force mate within the budget.
    NoSolution,
    /// Zero-ply budget and the position is already checkmate.
    Checkmate,
    /// First move of a forced mate.
    Forced(MoveDescriptor),
    /// The defender moved first and every move it has still allows mate by
    /// the given attacker.
    Inevitable(Color),
}

impl Verdict {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        !matches!(self, Verdict::NoSolution)
    }

    #[must_use]
    pub const fn forced_move(&self) -> Option<Move> {
        match self {
            Verdict::Forced(descriptor) => Some(descriptor.mv),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::NoSolution => write!(f, "No solution"),
            Verdict::Checkmate => write!(f, "Checkmate"),
            Verdict::Forced(descriptor) => write!(f, "{descriptor}"),
            Verdict::Inevitable(attacker) => write!(f, "{attacker} can win"),
        }
    }
}
