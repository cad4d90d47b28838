use std::fmt;
use std::path::PathBuf;

use crate::board::SearchConfig;

pub const USAGE: &str = "usage: forced_mate [INPUT] [OUTPUT] [--threads N] [--max-nodes N]";

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_OUTPUT: &str = "solution.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// A flag that takes a value was last on the line
    MissingValue { flag: String },
    /// A flag value is not a number
    InvalidNumber { flag: String, value: String },
    UnknownFlag { flag: String },
    /// More than two positional arguments
    UnexpectedArgument { arg: String },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::MissingValue { flag } => write!(f, "Missing value for {flag}"),
            OptionsError::InvalidNumber { flag, value } => {
                write!(f, "Invalid value '{value}' for {flag}: must be a number")
            }
            OptionsError::UnknownFlag { flag } => write!(f, "Unknown option {flag}"),
            OptionsError::UnexpectedArgument { arg } => write!(f, "Unexpected argument '{arg}'"),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Command-line settings of the `forced_mate` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub threads: usize,
    pub max_nodes: u64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            threads: 1,
            max_nodes: 0,
        }
    }
}

impl SolverOptions {
    /// Parse arguments, program name excluded.
    pub fn from_args<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = SolverOptions::default();
        let mut positional = 0;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--threads" | "-t" => {
                    options.threads = parse_number::<usize, _>(arg, args.next())?.max(1);
                }
                "--max-nodes" | "-n" => {
                    options.max_nodes = parse_number(arg, args.next())?;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(OptionsError::UnknownFlag {
                        flag: flag.to_string(),
                    });
                }
                path => {
                    match positional {
                        0 => options.input = PathBuf::from(path),
                        1 => options.output = PathBuf::from(path),
                        _ => {
                            return Err(OptionsError::UnexpectedArgument {
                                arg: path.to_string(),
                            })
                        }
                    }
                    positional += 1;
                }
            }
        }
        Ok(options)
    }

    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::with_threads(self.threads).nodes(self.max_nodes)
    }
}

fn parse_number<T, S>(flag: &str, value: Option<S>) -> Result<T, OptionsError>
where
    T: std::str::FromStr,
    S: AsRef<str>,
{
    let value = value.ok_or_else(|| OptionsError::MissingValue {
        flag: flag.to_string(),
    })?;
    let value = value.as_ref();
    value.parse().map_err(|_| OptionsError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
