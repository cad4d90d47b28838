//! Forced-mate search tests.
//!
//! Positions are small enough that every search finishes in milliseconds.

use super::{board, sq};
use crate::board::{
    attempt_forced_mate, Board, Color, MateSearch, Move, MoveDescriptor, Piece, SearchConfig,
    SearchError, Verdict,
};

use Color::{Black, White};
use Piece::{King, Pawn, Queen, Rook};

/// Queen swings to the back rank behind three pawns.
fn queen_mate_in_one() -> Board {
    board(&[
        ("e1", White, King),
        ("h5", White, Queen),
        ("e8", Black, King),
        ("d7", Black, Pawn),
        ("e7", Black, Pawn),
        ("f7", Black, Pawn),
    ])
}

/// Two rooks against a bare king, mate in two White moves.
fn rook_ladder() -> Board {
    board(&[
        ("e8", Black, King),
        ("a6", White, Rook),
        ("b1", White, Rook),
        ("h1", White, King),
    ])
}

fn lone_kings() -> Board {
    board(&[("e1", White, King), ("e8", Black, King)])
}

/// White to move has only Ka2, after which Ra8 mates.
fn king_walks_into_mate() -> Board {
    board(&[("a1", White, King), ("c2", Black, King), ("h8", Black, Rook)])
}

/// As above, but Rc1+ gives White a move that allows no mate.
fn rook_breaks_the_net() -> Board {
    board(&[
        ("a1", White, King),
        ("c2", Black, King),
        ("h8", Black, Rook),
        ("g1", White, Rook),
    ])
}

// ============================================================================
// Depth zero and one
// ============================================================================

#[test]
fn finds_queen_mate_in_one() {
    let b = queen_mate_in_one();
    let verdict = attempt_forced_mate(&b, true, 1).unwrap();
    assert_eq!(
        verdict,
        Verdict::Forced(MoveDescriptor {
            piece: Queen,
            color: White,
            mv: Move::new(sq("h5"), sq("h8")),
        })
    );
    assert_eq!(verdict.to_string(), "q 8 5 8 8");

    let mut after = b.clone();
    assert_eq!(after.make_valid_move(Move::new(sq("h5"), sq("h8"))), Ok(true));
    assert_eq!(after.is_real_checkmate(Black), Ok(true));
}

#[test]
fn search_leaves_the_board_untouched() {
    let b = queen_mate_in_one();
    let snapshot = b.clone();
    let _ = attempt_forced_mate(&b, true, 3).unwrap();
    assert_eq!(b, snapshot);
}

#[test]
fn lone_kings_have_no_solution() {
    let b = lone_kings();
    assert_eq!(b.is_in_check(White), Ok(false));
    assert_eq!(b.is_in_check(Black), Ok(false));
    assert_eq!(attempt_forced_mate(&b, true, 1), Ok(Verdict::NoSolution));
    assert_eq!(attempt_forced_mate(&b, false, 2), Ok(Verdict::NoSolution));
}

#[test]
fn zero_plies_reports_existing_mate() {
    let mated = board(&[
        ("a1", White, King),
        ("a8", Black, Rook),
        ("b8", Black, Rook),
        ("h8", Black, King),
    ]);
    assert_eq!(attempt_forced_mate(&mated, true, 0), Ok(Verdict::Checkmate));
    assert_eq!(attempt_forced_mate(&mated, false, 0), Ok(Verdict::Checkmate));
    assert_eq!(attempt_forced_mate(&lone_kings(), true, 0), Ok(Verdict::NoSolution));
}

#[test]
fn black_can_attack() {
    let b = board(&[
        ("e8", Black, King),
        ("a8", Black, Rook),
        ("h1", White, King),
        ("g2", White, Pawn),
        ("h2", White, Pawn),
    ]);
    let verdict = attempt_forced_mate(&b, false, 1).unwrap();
    assert_eq!(verdict.to_string(), "R 1 8 1 1");
    assert_eq!(attempt_forced_mate(&b, true, 1), Ok(Verdict::NoSolution));
}

#[test]
fn attacker_without_moves_fails() {
    // White is stalemated, so it cannot start a mating line.
    let b = board(&[("a1", White, King), ("b3", Black, Queen), ("h8", Black, King)]);
    assert_eq!(attempt_forced_mate(&b, true, 1), Ok(Verdict::NoSolution));
}

// ============================================================================
// Defender to move
// ============================================================================

#[test]
fn every_defender_move_allows_mate() {
    let b = king_walks_into_mate();
    assert_eq!(b.legal_moves(White), Ok(vec![Move::new(sq("a1"), sq("a2"))]));

    let verdict = attempt_forced_mate(&b, true, 2).unwrap();
    assert_eq!(verdict, Verdict::Inevitable(Black));
    assert_eq!(verdict.to_string(), "Black can win");
}

#[test]
fn one_defender_escape_refutes_the_mate() {
    let b = rook_breaks_the_net();
    assert_eq!(attempt_forced_mate(&b, true, 2), Ok(Verdict::NoSolution));

    // The escape: after Rc1+ Black must answer the check and cannot mate.
    let mut after = b.clone();
    assert_eq!(after.make_valid_move(Move::new(sq("g1"), sq("c1"))), Ok(true));
    assert_eq!(after.is_in_check(Black), Ok(true));
    assert_eq!(attempt_forced_mate(&after, false, 1), Ok(Verdict::NoSolution));

    // Ka2 alone would still lose.
    let mut after = b.clone();
    assert_eq!(after.make_valid_move(Move::new(sq("a1"), sq("a2"))), Ok(true));
    assert!(attempt_forced_mate(&after, false, 1).unwrap().is_solved());
}

#[test]
fn defender_without_moves_at_the_root_loses() {
    // White is stalemated and must move first, so nothing escapes.
    let b = board(&[("a1", White, King), ("b3", Black, Queen), ("h8", Black, King)]);
    assert_eq!(attempt_forced_mate(&b, true, 2), Ok(Verdict::Inevitable(Black)));
}

#[test]
fn side_to_move_is_independent_of_attacker() {
    let search = MateSearch::default();
    let b = king_walks_into_mate();
    let outcome = search.run(&b, White, Black, 2).unwrap();
    assert_eq!(outcome.verdict, Verdict::Inevitable(Black));
    // Black moving first mates at once, leaving White no reply.
    let verdict = search.run(&b, Black, Black, 2).unwrap().verdict;
    assert_eq!(verdict.forced_move(), Some(Move::new(sq("h8"), sq("a8"))));
    assert_eq!(verdict.to_string(), "R 8 8 1 8");
}

// ============================================================================
// Deeper searches
// ============================================================================

#[test]
fn rook_ladder_needs_three_plies() {
    let b = rook_ladder();
    assert_eq!(attempt_forced_mate(&b, true, 1), Ok(Verdict::NoSolution));

    let verdict = attempt_forced_mate(&b, true, 3).unwrap();
    let Verdict::Forced(first) = verdict else {
        panic!("expected a forced mate, got {verdict}");
    };
    assert_eq!(first.color, White);

    // Every Black reply must leave a mate in one.
    let mut after = b.clone();
    assert_eq!(after.make_valid_move(first.mv), Ok(true));
    let replies = after.legal_moves(Black).unwrap();
    assert!(!replies.is_empty());
    for reply in replies {
        let mut position = after.clone();
        assert_eq!(position.make_valid_move(reply), Ok(true));
        let follow_up = attempt_forced_mate(&position, true, 1).unwrap();
        assert!(follow_up.is_solved(), "no mate after {first} {reply}");
    }
}

#[test]
fn outcome_counts_nodes() {
    let outcome = MateSearch::default()
        .run(&queen_mate_in_one(), White, White, 1)
        .unwrap();
    assert!(outcome.verdict.is_solved());
    assert!(outcome.nodes > 1);
}

#[test]
fn node_limit_aborts_the_search() {
    let search = MateSearch::new(SearchConfig::default().nodes(3));
    assert_eq!(
        search.run(&rook_ladder(), White, White, 3),
        Err(SearchError::NodeLimitExceeded { limit: 3 })
    );
}

// ============================================================================
// Parallel root
// ============================================================================

#[test]
fn parallel_search_matches_sequential() {
    let sequential = MateSearch::default();
    let parallel = MateSearch::new(SearchConfig::with_threads(4));
    for (position, to_move, attacker, plies) in [
        (queen_mate_in_one(), White, White, 1),
        (rook_ladder(), White, White, 3),
        (rook_ladder(), White, White, 1),
        (lone_kings(), Black, White, 2),
        (king_walks_into_mate(), White, Black, 2),
        (rook_breaks_the_net(), White, Black, 2),
    ] {
        let expected = sequential.run(&position, to_move, attacker, plies).unwrap().verdict;
        let actual = parallel.run(&position, to_move, attacker, plies).unwrap().verdict;
        assert_eq!(actual, expected);
    }
}

#[test]
fn parallel_search_honours_node_limit() {
    let search = MateSearch::new(SearchConfig::with_threads(3).nodes(10));
    assert_eq!(
        search.run(&rook_ladder(), White, White, 3),
        Err(SearchError::NodeLimitExceeded { limit: 10 })
    );
}

#[test]
fn invalid_board_is_rejected() {
    let mut b = Board::empty();
    b.insert(crate::board::PlacedPiece::new(King, White, sq("e1")))
        .unwrap();
    assert!(matches!(
        MateSearch::default().run(&b, White, White, 1),
        Err(SearchError::Board(_))
    ));
}

#[test]
fn parallel_search_matches_sequential_on_random_boards() {
    use rand::prelude::*;

    use crate::board::{BoardBuilder, Square};

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let sequential = MateSearch::default();
    let parallel = MateSearch::new(SearchConfig::with_threads(3));
    let extras = [Queen, Rook, Rook, Pawn, Pawn];

    for _ in 0..12 {
        let mut squares: Vec<usize> = (0..64).collect();
        squares.shuffle(&mut rng);
        let mut builder = BoardBuilder::new()
            .piece(Square::from_index(squares[0]), White, King)
            .piece(Square::from_index(squares[1]), Black, King);
        for (&idx, &piece) in squares[2..6].iter().zip(&extras) {
            let color = Color::from_bool(rng.gen_bool(0.5));
            builder = builder.piece(Square::from_index(idx), color, piece);
        }
        let position = builder.build().unwrap();

        for to_move in Color::BOTH {
            for attacker in Color::BOTH {
                let expected = sequential.run(&position, to_move, attacker, 2).unwrap().verdict;
                let actual = parallel.run(&position, to_move, attacker, 2).unwrap().verdict;
                assert_eq!(actual, expected, "position:\n{position}");
            }
        }
    }
}
