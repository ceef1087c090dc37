//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action for the selected subcommand.

use crate::cli::actions::{backend, frontend, Action};
use crate::cli::commands::{CMD_BACKEND, CMD_FRONTEND};
use crate::config::{ClientConfig, Overrides};
use anyhow::{anyhow, Context, Result};
use std::{path::PathBuf, time::Duration};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if the subcommand or a required argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_FRONTEND, sub_m)) => Ok(Action::Frontend(frontend_args(sub_m))),
        Some((CMD_BACKEND, sub_m)) => Ok(Action::Backend(backend_args(sub_m)?)),
        _ => Err(anyhow!("missing subcommand: expected frontend or backend")),
    }
}

fn frontend_args(matches: &clap::ArgMatches) -> frontend::Args {
    let overrides = Overrides {
        api_base_url: matches.get_one::<String>("api-base-url").cloned(),
        gateway_url: matches.get_one::<String>("gateway-url").cloned(),
        request_timeout: matches
            .get_one::<u64>("request-timeout")
            .copied()
            .map(Duration::from_millis),
    };

    frontend::Args {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        config: ClientConfig::load(overrides),
    }
}

fn backend_args(matches: &clap::ArgMatches) -> Result<backend::Args> {
    let users_file = matches
        .get_one::<String>("users-file")
        .map(PathBuf::from)
        .context("missing required argument: --users-file")?;

    Ok(backend::Args {
        port: matches.get_one::<u16>("port").copied().unwrap_or(5000),
        users_file,
    })
}
