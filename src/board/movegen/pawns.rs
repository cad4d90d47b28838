use super::super::Color;
use super::{Path, NO_PATH};

/// One row forward, straight or diagonal. Whether the destination must be
/// empty (straight) or hold an enemy (diagonal) is decided when the move is
/// applied.
pub(super) fn pawn_path(color: Color, d_row: i32, d_col: i32, attack_only: bool) -> Option<Path> {
    if d_row != color.pawn_direction() {
        return None;
    }
    match d_col.abs() {
        0 if !attack_only => Some(NO_PATH),
        1 => Some(NO_PATH),
        _ => None,
    }
}
