//! Log level and log file arguments shared by every subcommand.
//!
//! The level is one count: `-v` flags raise it one step at a time from the
//! `error` default, and `USERDIR_LOG_LEVEL` sets it by name or by the same
//! number.

use clap::{builder::ValueParser, Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_LOG_DIR: &str = "log-dir";

/// Levels indexed by verbosity count; counts past the end stay at `trace`.
const LEVELS: [(&str, Level); 5] = [
    ("error", Level::ERROR),
    ("warn", Level::WARN),
    ("info", Level::INFO),
    ("debug", Level::DEBUG),
    ("trace", Level::TRACE),
];

/// Tracing level for a verbosity count.
#[must_use]
pub fn level_for(verbosity: u8) -> Level {
    LEVELS
        .get(usize::from(verbosity))
        .map_or(Level::TRACE, |(_, level)| *level)
}

/// Accepts a level name or its count, both as listed in [`LEVELS`].
fn parse_level(value: &str) -> Result<u8, String> {
    let value = value.trim().to_lowercase();
    LEVELS
        .iter()
        .zip(0u8..)
        .find(|((name, _), count)| *name == value || count.to_string() == value)
        .map(|(_, count)| count)
        .ok_or_else(|| {
            format!("invalid log level '{value}', expected error, warn, info, debug, trace or 0-4")
        })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Raise log verbosity: -v warn, -vv info, -vvv debug, -vvvv trace (default: error)")
                .env("USERDIR_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(ValueParser::from(parse_level)),
        )
        .arg(
            Arg::new(ARG_LOG_DIR)
                .long("log-dir")
                .help("Also write logs to a daily rotated file in this directory")
                .env("USERDIR_LOG_DIR")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_counts_agree() {
        for (count, (name, level)) in (0u8..).zip(LEVELS) {
            assert_eq!(parse_level(name), Ok(count));
            assert_eq!(parse_level(&count.to_string()), Ok(count));
            assert_eq!(level_for(count), level);
        }
        assert_eq!(parse_level(" INFO "), Ok(2));
    }

    #[test]
    fn default_count_is_error_level() {
        assert_eq!(level_for(0), Level::ERROR);
        assert_eq!(parse_level("error"), Ok(0));
    }

    #[test]
    fn counts_past_trace_stay_at_trace() {
        assert_eq!(level_for(4), Level::TRACE);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn unknown_levels_are_rejected() {
        for value in ["5", "verbose", "-1", ""] {
            assert!(parse_level(value).is_err(), "value {value:?}");
        }
    }
}
