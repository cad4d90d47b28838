use std::fmt;

use super::{BoardError, Color, Piece, PlacedPiece, Square, BOARD_SIZE};

/// Stable handle of a piece inside one board's arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct PieceId(usize);

/// Pieces in setup order plus a square index for constant-time lookup.
///
/// Captured pieces leave an empty slot behind so the handles of the
/// remaining pieces, and their iteration order, never change. `Clone` copies
/// every piece, so a cloned board shares nothing with the original.
#[derive(Clone, Debug)]
pub struct Board {
    slots: Vec<Option<PlacedPiece>>,
    squares: [Option<PieceId>; 64],
}

impl Board {
    pub(crate) fn empty() -> Self {
        Board {
            slots: Vec::new(),
            squares: [None; 64],
        }
    }

    /// Build a board from a piece list, checking that no square is used twice
    /// and that each side has exactly one king.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = PlacedPiece>,
    {
        let mut board = Board::empty();
        for piece in pieces {
            board.insert(piece)?;
        }
        board.validate()?;
        Ok(board)
    }

    pub(crate) fn insert(&mut self, piece: PlacedPiece) -> Result<(), BoardError> {
        let idx = piece.square.index();
        if self.squares[idx].is_some() {
            return Err(BoardError::SquareOccupied {
                square: piece.square,
            });
        }
        self.squares[idx] = Some(PieceId(self.slots.len()));
        self.slots.push(Some(piece));
        Ok(())
    }

    /// Check that each color has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::BOTH {
            let kings = self
                .pieces_of(color)
                .filter(|p| p.piece == Piece::King)
                .count();
            match kings {
                0 => return Err(BoardError::MissingKing { color }),
                1 => {}
                _ => return Err(BoardError::DuplicateKing { color }),
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&PlacedPiece> {
        self.squares[square.index()].and_then(|PieceId(id)| self.slots[id].as_ref())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Pieces in setup order.
    pub fn pieces(&self) -> impl Iterator<Item = &PlacedPiece> + '_ {
        self.slots.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &PlacedPiece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn king_square(&self, color: Color) -> Result<Square, BoardError> {
        self.pieces_of(color)
            .find(|p| p.piece == Piece::King)
            .map(|p| p.square)
            .ok_or(BoardError::MissingKing { color })
    }

    /// Take the piece on `square` off the board.
    pub(crate) fn remove(&mut self, square: Square) -> Option<PlacedPiece> {
        let PieceId(id) = self.squares[square.index()].take()?;
        self.slots[id].take()
    }

    /// Move the piece on `from` to the empty square `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        debug_assert!(self.is_empty(to), "relocate onto occupied square {to}");
        if let Some(id) = self.squares[from.index()].take() {
            if let Some(piece) = self.slots[id.0].as_mut() {
                piece.square = to;
            }
            self.squares[to.index()] = Some(id);
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces().eq(other.pieces())
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_SIZE).rev() {
            write!(f, "{row} ")?;
            for col in 1..=BOARD_SIZE {
                let symbol = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', PlacedPiece::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
