//! Forced-mate search.
//!
//! A depth-first proof search over full board copies:
//! - the attacker needs one legal move whose position still forces mate
//! - the defender is refuted only if none of its legal moves escapes
//! - with no plies left, the line succeeds iff either king is in real checkmate
//!
//! Moves are enumerated with the pieces in setup order and destinations
//! column by column, and the first forcing attacker move wins. A defender
//! without legal moves has no escape; an attacker without legal moves fails.
//!
//! The side to move need not be the attacker. With the defender to move the
//! root itself is a defender ply, and success means no reply escapes.
//!
//! Sibling moves never share a board, so the root can be split across worker
//! threads (see [`SearchConfig::with_threads`]) without locking.

mod parallel;
mod verdict;

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use log::{debug, trace};

use super::{Board, BoardError, Color, Move, SearchError};
pub use verdict::{MoveDescriptor, Verdict};

/// Configuration for a mate search
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Worker threads for the root moves (1 = sequential)
    pub threads: usize,
    /// Maximum positions to visit (0 = unlimited)
    pub node_limit: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threads: 1,
            node_limit: 0,
        }
    }
}

impl SearchConfig {
    /// Create config with specified thread count
    #[must_use]
    pub fn with_threads(threads: usize) -> Self {
        SearchConfig {
            threads: threads.max(1),
            ..Default::default()
        }
    }

    /// Set node limit
    #[must_use]
    pub fn nodes(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }
}

/// Verdict plus the amount of work it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub verdict: Verdict,
    pub nodes: u64,
}

/// Search entry point, reusable across puzzles.
#[derive(Clone, Debug, Default)]
pub struct MateSearch {
    config: SearchConfig,
}

impl MateSearch {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        MateSearch { config }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Decide whether `attacker` can force checkmate within `plies`
    /// half-moves, with `to_move` making the first one.
    ///
    /// When the attacker moves first a success names its forcing move. When
    /// the defender moves first every defender move is tried, and the verdict
    /// is [`Verdict::Inevitable`] only if none of them escapes.
    pub fn run(
        &self,
        board: &Board,
        to_move: Color,
        attacker: Color,
        plies: u32,
    ) -> Result<SearchOutcome, SearchError> {
        board.validate()?;
        let nodes = NodeCounter::new(self.config.node_limit);
        let started = Instant::now();
        debug!(
            "mate search: {to_move} to move, {attacker} attacks, {plies} plies, {} threads",
            self.config.threads
        );

        let verdict = if plies == 0 {
            nodes.visit()?;
            if board.has_checkmate()? {
                Verdict::Checkmate
            } else {
                Verdict::NoSolution
            }
        } else {
            let decisive = if self.config.threads > 1 {
                let threads = self.config.threads;
                parallel::first_decisive_move(board, to_move, attacker, plies, threads, &nodes)?
            } else {
                Prover::new(attacker, &nodes, Uninterrupted)
                    .first_decisive_move(board, to_move, plies)?
            };
            if to_move == attacker {
                match decisive.and_then(|mv| describe(board, mv)) {
                    Some(descriptor) => Verdict::Forced(descriptor),
                    None => Verdict::NoSolution,
                }
            } else if let Some(escape) = decisive {
                trace!("{to_move} escapes with {escape}");
                Verdict::NoSolution
            } else {
                Verdict::Inevitable(attacker)
            }
        };

        debug!(
            "mate search done: {verdict} after {} nodes in {:?}",
            nodes.visited(),
            started.elapsed()
        );
        Ok(SearchOutcome {
            verdict,
            nodes: nodes.visited(),
        })
    }
}

/// The side that makes the last of `plies` half-moves when `to_move` starts.
///
/// That side is the one that can deliver mate: odd budgets belong to the
/// side to move, even budgets to its opponent.
#[must_use]
pub const fn mating_side(to_move: Color, plies: u32) -> Color {
    if plies % 2 == 1 {
        to_move
    } else {
        to_move.opponent()
    }
}

/// Search with default settings. `white_first` picks the side to move and the
/// attacker follows from the budget's parity (see [`mating_side`]).
pub fn attempt_forced_mate(board: &Board, white_first: bool, plies: u32) -> Result<Verdict, SearchError> {
    let to_move = Color::from_bool(white_first);
    MateSearch::default()
        .run(board, to_move, mating_side(to_move, plies), plies)
        .map(|outcome| outcome.verdict)
}

fn describe(board: &Board, mv: Move) -> Option<MoveDescriptor> {
    board.piece_at(mv.from()).map(|mover| MoveDescriptor {
        piece: mover.piece,
        color: mover.color,
        mv,
    })
}

/// Shared visit counter enforcing the node limit.
pub(crate) struct NodeCounter {
    visited: AtomicU64,
    limit: u64,
}

impl NodeCounter {
    fn new(limit: u64) -> Self {
        NodeCounter {
            visited: AtomicU64::new(0),
            limit,
        }
    }

    fn visit(&self) -> Result<(), SearchError> {
        let visited = self.visited.fetch_add(1, Ordering::Relaxed) + 1;
        if self.limit > 0 && visited > self.limit {
            return Err(SearchError::NodeLimitExceeded { limit: self.limit });
        }
        Ok(())
    }

    fn visited(&self) -> u64 {
        self.visited.load(Ordering::Relaxed)
    }
}

/// Lets a proof stop early for reasons other than an error.
pub(crate) trait Interrupt {
    /// Everything that can end a proof without an answer.
    type Halt: From<SearchError> + From<BoardError>;

    fn poll(&self) -> Result<(), Self::Halt>;
}

/// The sequential search runs every proof to the end.
pub(crate) struct Uninterrupted;

impl Interrupt for Uninterrupted {
    type Halt = SearchError;

    fn poll(&self) -> Result<(), SearchError> {
        Ok(())
    }
}

/// One proof run for a fixed attacker.
pub(crate) struct Prover<'a, I> {
    attacker: Color,
    nodes: &'a NodeCounter,
    interrupt: I,
}

impl<'a, I: Interrupt> Prover<'a, I> {
    fn new(attacker: Color, nodes: &'a NodeCounter, interrupt: I) -> Self {
        Prover {
            attacker,
            nodes,
            interrupt,
        }
    }

    fn visit(&self) -> Result<(), I::Halt> {
        self.interrupt.poll()?;
        self.nodes.visit()?;
        Ok(())
    }

    /// Whether a move by `side` decides the root: for the attacker, the move
    /// forces mate; for the defender, it escapes.
    fn is_decisive(&self, side: Color, forces_mate: bool) -> bool {
        forces_mate == (side == self.attacker)
    }

    /// First move of `side` from `board` that decides the root, with `plies`
    /// half-moves left counting that move.
    fn first_decisive_move(
        &self,
        board: &Board,
        side: Color,
        plies: u32,
    ) -> Result<Option<Move>, I::Halt> {
        self.visit()?;
        let next = side.opponent();
        board.try_for_each_legal(board.piece_order_candidates(side), |mv, child| -> Result<_, I::Halt> {
            trace!("root candidate {mv}");
            if self.is_decisive(side, self.forces_mate(&child, next, plies - 1)?) {
                Ok(ControlFlow::Break(mv))
            } else {
                Ok(ControlFlow::Continue(()))
            }
        })
    }

    /// Whether the attacker forces mate from `board` with `side` to move and
    /// `remaining` plies left.
    fn forces_mate(&self, board: &Board, side: Color, remaining: u32) -> Result<bool, I::Halt> {
        self.visit()?;
        if remaining == 0 {
            return Ok(board.has_checkmate()?);
        }
        let next = side.opponent();
        let candidates = board.piece_order_candidates(side);
        if side == self.attacker {
            let forcing = board.try_for_each_legal(candidates, |_, child| -> Result<_, I::Halt> {
                if self.forces_mate(&child, next, remaining - 1)? {
                    Ok(ControlFlow::Break(()))
                } else {
                    Ok(ControlFlow::Continue(()))
                }
            })?;
            Ok(forcing.is_some())
        } else {
            let escape = board.try_for_each_legal(candidates, |_, child| -> Result<_, I::Halt> {
                if self.forces_mate(&child, next, remaining - 1)? {
                    Ok(ControlFlow::Continue(()))
                } else {
                    Ok(ControlFlow::Break(()))
                }
            })?;
            Ok(escape.is_none())
        }
    }
}
