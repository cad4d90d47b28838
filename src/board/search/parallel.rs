//! Root-split parallel search.
//!
//! The legal root moves are validated up front, each with its own board, and
//! handed out to scoped worker threads through a shared cursor. Every worker
//! proves its root moves sequentially. The answer is the lowest-index root
//! move that decides the search (a forcing move when the attacker is to move,
//! an escape when the defender is), which is the move a sequential search
//! would return: every lower index has been fully refuted by the time the
//! search ends.
//!
//! Workers drop a root move as soon as a lower-index sibling is known to
//! decide.
//! The first hard error (node limit, broken board) stops all workers and is
//! returned instead of any result.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use log::trace;
use parking_lot::Mutex;

use super::super::{Board, BoardError, Color, Move, SearchError};
use super::{Interrupt, NodeCounter, Prover};

/// Why a worker's proof stopped before reaching an answer.
#[derive(Debug)]
pub(crate) enum Halt {
    Error(SearchError),
    /// A sibling with a lower index already decided the search.
    Superseded,
}

impl From<SearchError> for Halt {
    fn from(e: SearchError) -> Self {
        Halt::Error(e)
    }
}

impl From<BoardError> for Halt {
    fn from(e: BoardError) -> Self {
        Halt::Error(e.into())
    }
}

/// Lets a worker notice that its root move no longer matters.
pub(crate) struct Cancellation<'a> {
    best: &'a AtomicUsize,
    stop: &'a AtomicBool,
    index: usize,
}

impl Interrupt for Cancellation<'_> {
    type Halt = Halt;

    fn poll(&self) -> Result<(), Halt> {
        if self.stop.load(Ordering::Relaxed) || self.best.load(Ordering::Relaxed) < self.index {
            Err(Halt::Superseded)
        } else {
            Ok(())
        }
    }
}

/// State shared by all workers of one search.
struct RootSplit<'a> {
    roots: Vec<(Move, Board)>,
    side: Color,
    attacker: Color,
    plies: u32,
    nodes: &'a NodeCounter,
    cursor: AtomicUsize,
    best: AtomicUsize,
    stop: AtomicBool,
    failure: Mutex<Option<SearchError>>,
}

impl RootSplit<'_> {
    fn work(&self, worker_id: usize) {
        loop {
            if self.stop.load(Ordering::Relaxed) {
                break;
            }
            let index = self.cursor.fetch_add(1, Ordering::Relaxed);
            if index >= self.roots.len() || index > self.best.load(Ordering::Relaxed) {
                break;
            }
            let (mv, child) = &self.roots[index];
            trace!("worker {worker_id}: root candidate {index} ({mv})");

            let cancellation = Cancellation {
                best: &self.best,
                stop: &self.stop,
                index,
            };
            let prover = Prover::new(self.attacker, self.nodes, cancellation);
            match prover.forces_mate(child, self.side.opponent(), self.plies - 1) {
                Ok(forces) if prover.is_decisive(self.side, forces) => {
                    trace!("worker {worker_id}: {mv} decides the search");
                    self.best.fetch_min(index, Ordering::SeqCst);
                }
                Ok(_) | Err(Halt::Superseded) => {}
                Err(Halt::Error(e)) => {
                    let mut failure = self.failure.lock();
                    if failure.is_none() {
                        *failure = Some(e);
                    }
                    self.stop.store(true, Ordering::Relaxed);
                }
            }
        }
    }
}

/// Parallel counterpart of the sequential root scan: the first move of
/// `side` that decides the search, or `None` if no root move does.
pub(super) fn first_decisive_move(
    board: &Board,
    side: Color,
    attacker: Color,
    plies: u32,
    threads: usize,
    nodes: &NodeCounter,
) -> Result<Option<Move>, SearchError> {
    nodes.visit()?;

    let mut roots = Vec::new();
    board.try_for_each_legal(board.piece_order_candidates(side), |mv, child| {
        roots.push((mv, child));
        Ok::<_, BoardError>(ControlFlow::<()>::Continue(()))
    })?;

    let workers = threads.min(roots.len()).max(1);
    let split = RootSplit {
        roots,
        side,
        attacker,
        plies,
        nodes,
        cursor: AtomicUsize::new(0),
        best: AtomicUsize::new(usize::MAX),
        stop: AtomicBool::new(false),
        failure: Mutex::new(None),
    };

    thread::scope(|scope| {
        for worker_id in 0..workers {
            let split = &split;
            scope.spawn(move || split.work(worker_id));
        }
    });

    if let Some(e) = split.failure.into_inner() {
        return Err(e);
    }
    let best = split.best.into_inner();
    Ok(split.roots.get(best).map(|(mv, _)| *mv))
}
