//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Movement shape shared by every piece of a kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveRule {
    /// One square in any direction.
    Step,
    /// Knight jump, never blocked.
    Leap,
    /// Any distance along a line; intermediate squares must be empty.
    Slide { straight: bool, diagonal: bool },
    /// Color-directed single step forward, or a diagonal capture.
    Pawn,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Movement shape of this piece kind.
    #[inline]
    #[must_use]
    pub const fn move_rule(self) -> MoveRule {
        match self {
            Piece::King => MoveRule::Step,
            Piece::Knight => MoveRule::Leap,
            Piece::Pawn => MoveRule::Pawn,
            Piece::Rook => MoveRule::Slide {
                straight: true,
                diagonal: false,
            },
            Piece::Bishop => MoveRule::Slide {
                straight: false,
                diagonal: true,
            },
            Piece::Queen => MoveRule::Slide {
                straight: true,
                diagonal: true,
            },
        }
    }

    /// Parse a piece from a character, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Character in puzzle notation: lowercase for White, uppercase for Black.
    #[inline]
    #[must_use]
    pub fn to_puzzle_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c
        } else {
            c.to_ascii_uppercase()
        }
    }

    /// Parse a puzzle-notation character into piece and color.
    #[must_use]
    pub fn from_puzzle_char(c: char) -> Option<(Piece, Color)> {
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_lowercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((piece, color))
    }

    /// Returns true if this piece is a slider (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self.move_rule(), MoveRule::Slide { .. })
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn from_bool(white: bool) -> Color {
        if white {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn forward direction in rows (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on a board square.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPiece {
    pub piece: Piece,
    pub color: Color,
    pub square: Square,
}

impl PlacedPiece {
    #[must_use]
    pub const fn new(piece: Piece, color: Color, square: Square) -> Self {
        PlacedPiece {
            piece,
            color,
            square,
        }
    }

    /// Puzzle-notation character of this piece.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> char {
        self.piece.to_puzzle_char(self.color)
    }
}
