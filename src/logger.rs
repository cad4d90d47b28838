//! Minimal stderr backend for the `log` facade used by the binaries.
//!
//! The level comes from the `FORCED_MATE_LOG` environment variable
//! (`off`, `error`, `warn`, `info`, `debug` or `trace`) and defaults to `warn`.

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "FORCED_MATE_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a level name, case-insensitively. Unknown names yield `None`.
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Level requested through [`LOG_ENV`], or the default.
#[must_use]
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger at the level from the environment.
///
/// Fails if another logger was installed first.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(level_from_env())
}

pub fn init_with_level(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
