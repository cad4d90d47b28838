use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

use log::info;

use forced_mate::board::MateSearch;
use forced_mate::logger;
use forced_mate::puzzle::{solve_all, SolverOptions, USAGE};

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("Error: {e}");
    }

    let options = match SolverOptions::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let input = match File::open(&options.input) {
        Ok(file) => BufReader::new(file),
        Err(e) => {
            eprintln!("Error: cannot open {}: {e}", options.input.display());
            return ExitCode::FAILURE;
        }
    };
    let output = match File::create(&options.output) {
        Ok(file) => BufWriter::new(file),
        Err(e) => {
            eprintln!("Error: cannot create {}: {e}", options.output.display());
            return ExitCode::FAILURE;
        }
    };

    let search = MateSearch::new(options.search_config());
    match solve_all(input, output, &search) {
        Ok(summary) => {
            info!(
                "{} puzzles, {} solved, {} failed",
                summary.puzzles, summary.solved, summary.failed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
