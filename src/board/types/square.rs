//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Board width and height.
pub const BOARD_SIZE: i32 = 8;

/// A square on the board, 1-based: row 1..=8 (rank), col 1..=8 (file a..h).
///
/// Every public constructor checks the bounds, so a `Square` always indexes
/// the board:
///
/// ```compile_fail
/// let off_board = forced_mate::Square::from_index(64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if (1..=BOARD_SIZE).contains(&row) && (1..=BOARD_SIZE).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row as i32
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i32 {
        self.col as i32
    }

    /// Square shifted by the given deltas, if still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Square::new(self.row() + d_row, self.col() + d_col)
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.col as usize - 1)
    }

    /// Create a square from an index (0-63). Callers guarantee the range;
    /// outside the crate squares come from [`Square::new`] or parsing.
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64, "square index out of range");
        Square {
            row: (idx / 8) as u8 + 1,
            col: (idx % 8) as u8 + 1,
        }
    }

    /// Every square, column 1..=8 outer and row 1..=8 inner.
    ///
    /// This is the enumeration order used by checkmate and mate search, so it
    /// decides which escape or forcing move is reported first.
    pub fn by_column() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE).flat_map(|col| (1..=BOARD_SIZE).map(move |row| Square {
            row: row as u8,
            col: col as u8,
        }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col - 1 + b'a') as char, self.row)
    }
}

impl From<Square> for (i32, i32) {
    fn from(sq: Square) -> Self {
        (sq.row(), sq.col())
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        if !(1..=BOARD_SIZE).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if !(1..=BOARD_SIZE).contains(&col) {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = match bytes[0] {
            b'a'..=b'h' => i32::from(bytes[0] - b'a') + 1,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => i32::from(bytes[1] - b'0'),
            _ => return Err(invalid()),
        };
        Square::try_from((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Square::new(1, 1).is_some());
        assert!(Square::new(8, 8).is_some());
        assert!(Square::new(0, 4).is_none());
        assert!(Square::new(4, 9).is_none());
        assert_eq!(
            Square::try_from((9, 1)),
            Err(SquareError::RowOutOfBounds { row: 9 })
        );
        assert_eq!(
            Square::try_from((1, 0)),
            Err(SquareError::ColOutOfBounds { col: 0 })
        );
    }

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq.row(), 4);
        assert_eq!(sq.col(), 5);
        assert_eq!(sq.to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
    }

    #[test]
    fn test_index_roundtrip() {
        for idx in 0..64 {
            assert_eq!(Square::from_index(idx).index(), idx);
        }
        assert_eq!("a1".parse::<Square>().unwrap().index(), 0);
        assert_eq!("h8".parse::<Square>().unwrap().index(), 63);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_bounds() {
        let e4: Square = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(serde_json::to_string(&e4).unwrap(), "[4,5]");
        assert!(serde_json::from_str::<Square>("[9,1]").is_err());
        assert!(serde_json::from_str::<Square>("[1,0]").is_err());
    }

    #[test]
    fn test_offset() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.offset(1, 1), Some("b2".parse().unwrap()));
        assert_eq!(a1.offset(-1, 0), None);
    }

    #[test]
    fn test_by_column_order() {
        let squares: Vec<Square> = Square::by_column().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a1");
        assert_eq!(squares[1].to_string(), "a2");
        assert_eq!(squares[8].to_string(), "b1");
        assert_eq!(squares[63].to_string(), "h8");
    }
}
