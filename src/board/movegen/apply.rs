use log::trace;

use super::super::{Board, Move, MoveError, MoveRule, Square};

impl Board {
    /// `true` when every square of `path` is empty.
    #[must_use]
    pub fn check_block(&self, path: &[Square]) -> bool {
        path.iter().all(|&sq| self.is_empty(sq))
    }

    /// Put the piece on `from` onto `to`, capturing an enemy occupant.
    ///
    /// Fails when `from` is empty or `to` holds a piece of the mover's color.
    /// No geometry is checked here.
    pub fn place_piece(&mut self, from: Square, to: Square) -> bool {
        let Some(mover) = self.piece_at(from).copied() else {
            return false;
        };
        if let Some(occupant) = self.piece_at(to) {
            if occupant.color == mover.color {
                trace!("{from}{to}: {to} holds a piece of the same color");
                return false;
            }
            self.remove(to);
        }
        self.relocate(from, to);
        true
    }

    /// Pawn semantics: straight steps need an empty destination, diagonal
    /// steps need an enemy piece to capture.
    pub fn move_pawn(&mut self, from: Square, to: Square) -> bool {
        let straight = from.col() == to.col();
        match (straight, self.is_empty(to)) {
            (true, true) => {
                self.relocate(from, to);
                true
            }
            (false, false) => self.place_piece(from, to),
            _ => false,
        }
    }

    /// Apply a single move using movement geometry and capture rules only.
    ///
    /// Whether the mover's king ends up in check is not considered; use
    /// [`Board::make_valid_move`] for fully legal moves.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let (from, to) = (mv.from(), mv.to());
        let Some(mover) = self.piece_at(from).copied() else {
            trace!("{mv}: no piece on {from}");
            return false;
        };
        let Some(path) = mover.path_to(to, false) else {
            trace!("{mv}: {:?} cannot move that way", mover.piece);
            return false;
        };
        match mover.piece.move_rule() {
            MoveRule::Step | MoveRule::Leap => self.place_piece(from, to),
            MoveRule::Pawn => self.move_pawn(from, to),
            MoveRule::Slide { .. } => self.check_block(path) && self.place_piece(from, to),
        }
    }

    /// Apply moves in order, one success flag per move.
    ///
    /// Processing stops at the first failing move; its flag and every flag
    /// after it stay `false`.
    pub fn make_moves(&mut self, moves: &[Move]) -> Vec<bool> {
        let mut applied = vec![false; moves.len()];
        for (flag, &mv) in applied.iter_mut().zip(moves) {
            *flag = self.apply_move(mv);
            if !*flag {
                break;
            }
        }
        applied
    }

    /// [`Board::make_moves`] from a flat `[from_col, from_row, to_col, to_row, ...]` list.
    pub fn make_moves_from_coords(&mut self, coords: &[i32]) -> Result<Vec<bool>, MoveError> {
        let moves = Move::sequence_from_coords(coords)?;
        Ok(self.make_moves(&moves))
    }
}
