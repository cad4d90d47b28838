use once_cell::sync::Lazy;

use super::Square;

/// Squares strictly between two squares on a shared rank, file or diagonal,
/// indexed by `from * 64 + to`. Unaligned pairs map to an empty list.
static BETWEEN: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    let mut table = vec![Vec::new(); 64 * 64];
    for from_idx in 0..64 {
        let from = Square::from_index(from_idx);
        for to_idx in 0..64 {
            let to = Square::from_index(to_idx);
            let d_row = to.row() - from.row();
            let d_col = to.col() - from.col();
            if !is_line(d_row, d_col) {
                continue;
            }
            let (step_row, step_col) = (d_row.signum(), d_col.signum());
            let squares = &mut table[from_idx * 64 + to_idx];
            let mut current = from.offset(step_row, step_col);
            while let Some(sq) = current {
                if sq == to {
                    break;
                }
                squares.push(sq);
                current = sq.offset(step_row, step_col);
            }
        }
    }
    table
});

/// Nonzero displacement along a rank, file or diagonal.
#[inline]
pub(crate) fn is_line(d_row: i32, d_col: i32) -> bool {
    (d_row != 0 || d_col != 0) && (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
}

#[inline]
pub(crate) fn between(from: Square, to: Square) -> &'static [Square] {
    &BETWEEN[from.index() * 64 + to.index()]
}
