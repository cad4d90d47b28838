use super::{Path, NO_PATH};

/// Knight jumps: (1, 2) or (2, 1) in absolute value. Nothing can block them.
pub(super) fn leap_path(d_row: i32, d_col: i32) -> Option<Path> {
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)).then_some(NO_PATH)
}
