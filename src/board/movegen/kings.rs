use super::{Path, NO_PATH};

/// One square in any of the eight directions.
pub(super) fn step_path(d_row: i32, d_col: i32) -> Option<Path> {
    let adjacent = d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0);
    adjacent.then_some(NO_PATH)
}
