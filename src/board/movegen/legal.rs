use std::ops::ControlFlow;

use super::super::{Board, BoardError, Color, Move, MoveError, Square};

impl Board {
    /// Make a move only if it is fully legal.
    ///
    /// On top of [`Board::apply_move`], the move is refused when the
    /// opponent's king is already in check (the position cannot have arisen
    /// with this side to move) or when it would leave the mover's own king in
    /// check. The move is tried on a copy first; `self` only changes when the
    /// move is accepted.
    pub fn make_valid_move(&mut self, mv: Move) -> Result<bool, BoardError> {
        let Some(mover) = self.piece_at(mv.from()).map(|p| p.color) else {
            return Ok(false);
        };
        if self.is_in_check(mover.opponent())? {
            return Ok(false);
        }
        let mut trial = self.clone();
        if !trial.apply_move(mv) {
            return Ok(false);
        }
        if trial.is_in_check(mover)? {
            return Ok(false);
        }
        *self = trial;
        Ok(true)
    }

    /// [`Board::make_valid_move`] from `[from_col, from_row, to_col, to_row]`.
    pub fn make_valid_move_coords(&mut self, coords: &[i32]) -> Result<bool, MoveError> {
        let mv = Move::from_coords(coords)?;
        Ok(self.make_valid_move(mv)?)
    }

    /// Candidate moves for `color`, pieces in setup order, destinations
    /// column-major. Geometrically impossible destinations are skipped.
    pub fn piece_order_candidates(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        self.pieces_of(color).flat_map(|piece| {
            Square::by_column()
                .filter(move |&to| piece.path_to(to, false).is_some())
                .map(move |to| Move::new(piece.square, to))
        })
    }

    /// Candidate moves for `color`, sources and destinations both column-major.
    pub fn square_order_candidates(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        Square::by_column()
            .filter_map(move |from| self.piece_at(from).filter(|p| p.color == color))
            .flat_map(|piece| {
                Square::by_column()
                    .filter(move |&to| piece.path_to(to, false).is_some())
                    .map(move |to| Move::new(piece.square, to))
            })
    }

    /// Validate each candidate on its own copy of the board and hand the
    /// legal ones, with the resulting position, to `f` until it breaks.
    pub fn try_for_each_legal<I, B, E, F>(&self, candidates: I, mut f: F) -> Result<Option<B>, E>
    where
        I: IntoIterator<Item = Move>,
        E: From<BoardError>,
        F: FnMut(Move, Board) -> Result<ControlFlow<B>, E>,
    {
        for mv in candidates {
            let mut child = self.clone();
            if !child.make_valid_move(mv)? {
                continue;
            }
            if let ControlFlow::Break(found) = f(mv, child)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Every legal move for `color`, in setup order of the moving pieces.
    pub fn legal_moves(&self, color: Color) -> Result<Vec<Move>, BoardError> {
        let mut moves = Vec::new();
        self.try_for_each_legal(self.piece_order_candidates(color), |mv, _| {
            moves.push(mv);
            Ok::<_, BoardError>(ControlFlow::<()>::Continue(()))
        })?;
        Ok(moves)
    }
}
