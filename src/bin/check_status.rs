use std::env;
use std::process::ExitCode;

use forced_mate::board::Color;
use forced_mate::logger;
use forced_mate::puzzle::Puzzle;

fn main() -> ExitCode {
    let _ = logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_status \"<plies> <piece> <col> <row> ...\"");
        return ExitCode::from(2);
    }

    let line = args.join(" ");
    let puzzle = match Puzzle::parse(&line) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let board = match puzzle.board() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{board}");
    println!("plies: {}", puzzle.plies);
    println!("to move: {}", puzzle.to_move());
    println!("attacker: {}", puzzle.attacker());
    for color in Color::BOTH {
        let status = match board.status(color) {
            Ok(status) => status,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        };
        println!("{color} check: {}", status.in_check);
        println!("{color} weak_checkmate: {}", status.weak_checkmate);
        println!("{color} real_checkmate: {}", status.real_checkmate);
        match board.legal_moves(color) {
            Ok(moves) => println!("{color} legal_moves: {}", moves.len()),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
    ExitCode::SUCCESS
}
