use crate::cli::{
    actions::Action,
    commands::{self, logging},
    dispatch,
    telemetry::{self, LogFile},
};
use anyhow::Result;
use std::path::PathBuf;

/// Parses the command line, sets up logging for the chosen subcommand and
/// returns the action to run.
///
/// # Errors
///
/// Returns an error if telemetry cannot be initialized or the subcommand is unknown
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let level = logging::level_for(
        matches
            .get_one::<u8>(logging::ARG_VERBOSITY)
            .copied()
            .unwrap_or(0),
    );
    let log_file = matches
        .get_one::<PathBuf>(logging::ARG_LOG_DIR)
        .map(|dir| LogFile {
            dir: dir.clone(),
            service: matches.subcommand_name().unwrap_or("userdir").to_string(),
        });

    telemetry::init(level, log_file)?;

    dispatch::handler(&matches)
}
