use super::{Board, BoardError, Color, PlacedPiece, Square};

impl Board {
    /// Whether the king of `color` is attacked by any enemy piece.
    ///
    /// Enemy pieces are scanned in setup order; sliders must have a clear
    /// line to the king, knights, kings and pawns are never blocked.
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardError> {
        let king = self.king_square(color)?;
        Ok(self
            .pieces_of(color.opponent())
            .any(|attacker| self.hits(attacker, king)))
    }

    /// Whether `attacker` hits `target` with nothing standing in between.
    #[must_use]
    pub fn hits(&self, attacker: &PlacedPiece, target: Square) -> bool {
        attacker
            .path_to(target, true)
            .is_some_and(|path| self.check_block(path))
    }
}
