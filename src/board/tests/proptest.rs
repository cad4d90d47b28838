//! Property-based tests using proptest.

use crate::board::{path, Board, BoardBuilder, Color, Piece, Square};
use proptest::prelude::*;
use proptest::sample::subsequence;

const NON_KINGS: [Piece; 5] = [
    Piece::Queen,
    Piece::Rook,
    Piece::Bishop,
    Piece::Knight,
    Piece::Pawn,
];

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..64usize).prop_map(Square::from_index)
}

fn color_strategy() -> impl Strategy<Value = Color> {
    any::<bool>().prop_map(Color::from_bool)
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    (0..Piece::ALL.len()).prop_map(|i| Piece::ALL[i])
}

/// Both kings plus up to eight other pieces on distinct squares.
fn board_strategy() -> impl Strategy<Value = Board> {
    (
        subsequence((0..64usize).collect::<Vec<_>>(), 2..=10).prop_shuffle(),
        prop::collection::vec((0..NON_KINGS.len(), any::<bool>()), 8),
    )
        .prop_map(|(squares, extras)| {
            let mut builder = BoardBuilder::new()
                .piece(Square::from_index(squares[0]), Color::White, Piece::King)
                .piece(Square::from_index(squares[1]), Color::Black, Piece::King);
            for (&idx, &(kind, white)) in squares[2..].iter().zip(&extras) {
                builder = builder.piece(Square::from_index(idx), Color::from_bool(white), NON_KINGS[kind]);
            }
            builder.build().unwrap()
        })
}

/// Movement shapes written out directly from the rules.
fn reachable(piece: Piece, color: Color, from: Square, to: Square) -> bool {
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    let moved = (d_row, d_col) != (0, 0);
    let straight = moved && (d_row == 0 || d_col == 0);
    let diagonal = moved && d_row.abs() == d_col.abs();
    match piece {
        Piece::King => moved && d_row.abs() <= 1 && d_col.abs() <= 1,
        Piece::Queen => straight || diagonal,
        Piece::Rook => straight,
        Piece::Bishop => diagonal,
        Piece::Knight => d_row.abs() * d_col.abs() == 2,
        Piece::Pawn => d_row == color.pawn_direction() && d_col.abs() <= 1,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: move geometry matches the closed-form rules
    #[test]
    fn prop_geometry_closed_form(
        piece in piece_strategy(),
        color in color_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let found = path(piece, color, from, to, false);
        prop_assert_eq!(found.is_some(), reachable(piece, color, from, to));
        if let Some(squares) = found {
            let expected = if piece.is_slider() {
                (to.row() - from.row()).abs().max((to.col() - from.col()).abs()) - 1
            } else {
                0
            };
            prop_assert_eq!(squares.len() as i32, expected);
        }
    }

    /// Property: knights and kings never have squares to pass through
    #[test]
    fn prop_leapers_never_blocked(
        color in color_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        for piece in [Piece::Knight, Piece::King, Piece::Pawn] {
            if let Some(squares) = path(piece, color, from, to, false) {
                prop_assert!(squares.is_empty());
            }
        }
    }

    /// Property: an accepted move never leaves the mover's king in check
    #[test]
    fn prop_valid_move_never_self_checks(board in board_strategy(), color in color_strategy()) {
        for mv in board.piece_order_candidates(color) {
            let mut child = board.clone();
            if child.make_valid_move(mv).unwrap() {
                prop_assert!(!child.is_in_check(color).unwrap());
                prop_assert!(child.validate().is_ok());
            } else {
                prop_assert_eq!(&child, &board);
            }
        }
    }

    /// Property: changing a clone never changes the original
    #[test]
    fn prop_clone_isolation(board in board_strategy(), color in color_strategy()) {
        let snapshot = board.clone();
        let mut copy = board.clone();
        let candidates: Vec<_> = board.piece_order_candidates(color).collect();
        copy.make_moves(&candidates);
        prop_assert_eq!(&board, &snapshot);
    }

    /// Property: real checkmate implies weak checkmate implies check
    #[test]
    fn prop_checkmate_hierarchy(board in board_strategy()) {
        for color in Color::BOTH {
            let status = board.status(color).unwrap();
            prop_assert!(!status.real_checkmate || status.weak_checkmate);
            prop_assert!(!status.weak_checkmate || status.in_check);
        }
    }
}
