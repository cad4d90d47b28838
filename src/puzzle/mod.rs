//! Puzzle files: one position per line, one verdict per line.
//!
//! A line reads `<plies> (<piece> <col> <row>)*`, for example
//! `1 k 5 1 q 8 5 K 5 8 P 4 7 P 5 7 P 6 7`. Lowercase pieces are White,
//! uppercase Black. Only the first character of the first token is the ply
//! budget. White always moves first. An odd budget means White attacks; an
//! even one means Black attacks and every White move must still lose, which
//! is reported as `Black can win`.

mod options;

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::board::{
    mating_side, Board, BoardError, Color, MateSearch, Piece, PlacedPiece, SearchError, Square, SquareError,
    Verdict,
};

pub use options::{OptionsError, SolverOptions, USAGE};

/// Error type for puzzle line parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The line has no tokens
    Empty,
    /// The ply budget does not start with a digit
    InvalidPlyBudget { token: String },
    /// Unknown piece letter
    InvalidPiece { token: String },
    /// A coordinate is not an integer
    InvalidCoordinate { token: String },
    /// A piece without both coordinates
    MissingCoordinate { piece: char },
    /// Coordinates off the board
    Square(SquareError),
    /// The pieces do not form a valid position
    Board(BoardError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Empty => write!(f, "Empty puzzle line"),
            PuzzleError::InvalidPlyBudget { token } => {
                write!(f, "Invalid ply budget '{token}': must start with a digit")
            }
            PuzzleError::InvalidPiece { token } => write!(f, "Invalid piece '{token}'"),
            PuzzleError::InvalidCoordinate { token } => {
                write!(f, "Invalid coordinate '{token}': must be an integer")
            }
            PuzzleError::MissingCoordinate { piece } => {
                write!(f, "Piece '{piece}' needs a column and a row")
            }
            PuzzleError::Square(e) => write!(f, "{e}"),
            PuzzleError::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Square(e) => Some(e),
            PuzzleError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for PuzzleError {
    fn from(e: SquareError) -> Self {
        PuzzleError::Square(e)
    }
}

impl From<BoardError> for PuzzleError {
    fn from(e: BoardError) -> Self {
        PuzzleError::Board(e)
    }
}

/// A parsed puzzle line. The pieces are kept as given; whether they form a
/// valid position is only checked by [`Puzzle::board`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub plies: u32,
    pub pieces: Vec<PlacedPiece>,
}

impl Puzzle {
    pub fn parse(line: &str) -> Result<Self, PuzzleError> {
        let mut tokens = line.split_whitespace();
        let budget = tokens.next().ok_or(PuzzleError::Empty)?;
        let plies = budget
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| PuzzleError::InvalidPlyBudget {
                token: budget.to_string(),
            })?;

        let mut pieces = Vec::new();
        while let Some(token) = tokens.next() {
            let (piece, color) = token
                .chars()
                .next()
                .and_then(Piece::from_puzzle_char)
                .ok_or_else(|| PuzzleError::InvalidPiece {
                    token: token.to_string(),
                })?;
            let symbol = piece.to_puzzle_char(color);
            let col = parse_coordinate(tokens.next(), symbol)?;
            let row = parse_coordinate(tokens.next(), symbol)?;
            let square = Square::try_from((row, col))?;
            pieces.push(PlacedPiece::new(piece, color, square));
        }
        Ok(Puzzle { plies, pieces })
    }

    /// White always makes the first move of a puzzle.
    #[must_use]
    pub const fn to_move(&self) -> Color {
        Color::White
    }

    /// The side that makes the last move and must deliver mate: White for an
    /// odd budget, Black for an even one.
    #[must_use]
    pub const fn attacker(&self) -> Color {
        mating_side(self.to_move(), self.plies)
    }

    pub fn board(&self) -> Result<Board, BoardError> {
        Board::from_pieces(self.pieces.iter().copied())
    }

    /// Solve the puzzle. A position that is not a valid board has no solution.
    pub fn solve(&self, search: &MateSearch) -> Result<Verdict, SearchError> {
        let board = match self.board() {
            Ok(board) => board,
            Err(e) => {
                warn!("invalid puzzle: {e}");
                return Ok(Verdict::NoSolution);
            }
        };
        debug!("solving for {} in {} plies\n{board}", self.attacker(), self.plies);
        search
            .run(&board, self.to_move(), self.attacker(), self.plies)
            .map(|outcome| outcome.verdict)
    }
}

fn parse_coordinate(token: Option<&str>, piece: char) -> Result<i32, PuzzleError> {
    let token = token.ok_or(PuzzleError::MissingCoordinate { piece })?;
    token
        .parse()
        .map_err(|_| PuzzleError::InvalidCoordinate {
            token: token.to_string(),
        })
}

/// Summary of one [`solve_all`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveSummary {
    pub puzzles: usize,
    pub solved: usize,
    pub failed: usize,
}

/// Solve every non-blank line of `input`, writing one line per puzzle.
///
/// Lines that fail to parse or whose search fails produce `Error: <reason>`
/// so the output stays aligned with the input. Only I/O errors abort.
pub fn solve_all<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    search: &MateSearch,
) -> io::Result<SolveSummary> {
    let mut summary = SolveSummary::default();
    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        summary.puzzles += 1;
        let result = Puzzle::parse(&line)
            .map_err(|e| e.to_string())
            .and_then(|puzzle| puzzle.solve(search).map_err(|e| e.to_string()));
        match result {
            Ok(verdict) => {
                info!("line {}: {verdict}", line_no + 1);
                if verdict.is_solved() {
                    summary.solved += 1;
                }
                writeln!(output, "{verdict}")?;
            }
            Err(reason) => {
                warn!("line {}: {reason}", line_no + 1);
                summary.failed += 1;
                writeln!(output, "Error: {reason}")?;
            }
        }
    }
    output.flush()?;
    Ok(summary)
}
