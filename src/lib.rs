pub mod board;
pub mod logger;
pub mod puzzle;

pub use board::{attempt_forced_mate, Board, Color, MateSearch, Move, Piece, Square, Verdict};
pub use puzzle::{solve_all, Puzzle, PuzzleError, SolverOptions};
