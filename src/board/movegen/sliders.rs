use super::super::attack_tables::{between, is_line};
use super::super::Square;
use super::Path;

/// Rook, bishop and queen lines. The returned path holds the squares strictly
/// between `from` and `to`.
pub(super) fn slide_path(from: Square, to: Square, straight: bool, diagonal: bool) -> Option<Path> {
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    if !is_line(d_row, d_col) {
        return None;
    }
    let on_straight = d_row == 0 || d_col == 0;
    if (on_straight && straight) || (!on_straight && diagonal) {
        Some(between(from, to))
    } else {
        None
    }
}
