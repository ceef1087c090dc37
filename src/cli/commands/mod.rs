pub mod logging;

use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_GATEWAY_URL};
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        RangedU64ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub const CMD_FRONTEND: &str = "frontend";
pub const CMD_BACKEND: &str = "backend";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userdir")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(frontend())
        .subcommand(backend());

    logging::with_args(command)
}

fn frontend() -> Command {
    Command::new(CMD_FRONTEND)
        .about("Serve the user directory page")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("USERDIR_FRONTEND_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("api-base-url")
                .long("api-base-url")
                .help("Base URL prefixed to every API call")
                .long_help(format!(
                    "Base URL prefixed to every API call. Relative values are resolved against --gateway-url (default: {DEFAULT_API_BASE_URL})"
                ))
                .env("USERDIR_API_BASE_URL"),
        )
        .arg(
            Arg::new("gateway-url")
                .long("gateway-url")
                .help(format!(
                    "Origin a relative API base URL is resolved against (default: {DEFAULT_GATEWAY_URL})"
                ))
                .env("USERDIR_GATEWAY_URL"),
        )
        .arg(
            Arg::new("request-timeout")
                .long("request-timeout")
                .help("API request timeout in milliseconds")
                .default_value("10000")
                .env("USERDIR_REQUEST_TIMEOUT_MS")
                .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
        )
}

fn backend() -> Command {
    Command::new(CMD_BACKEND)
        .about("Serve the JSON user API")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("5000")
                .env("USERDIR_BACKEND_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("users-file")
                .short('f')
                .long("users-file")
                .help("JSON file with the user records")
                .default_value("users.json")
                .env("USERDIR_USERS_FILE"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "userdir");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_frontend_defaults() {
        temp_env::with_vars(
            [
                ("USERDIR_FRONTEND_PORT", None::<&str>),
                ("USERDIR_API_BASE_URL", None),
                ("USERDIR_GATEWAY_URL", None),
                ("USERDIR_REQUEST_TIMEOUT_MS", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["userdir", "frontend"]);
                let sub = matches.subcommand_matches(CMD_FRONTEND);
                assert!(sub.is_some());
                if let Some(sub) = sub {
                    assert_eq!(sub.get_one::<u16>("port").copied(), Some(8080));
                    assert_eq!(sub.get_one::<u64>("request-timeout").copied(), Some(10_000));
                    assert!(sub.get_one::<String>("api-base-url").is_none());
                }
            },
        );
    }

    #[test]
    fn test_frontend_env() {
        temp_env::with_vars(
            [
                ("USERDIR_FRONTEND_PORT", Some("9090")),
                ("USERDIR_API_BASE_URL", Some("https://users.example/api")),
                ("USERDIR_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["userdir", "frontend"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                let sub = matches.subcommand_matches(CMD_FRONTEND);
                assert_eq!(sub.and_then(|s| s.get_one::<u16>("port").copied()), Some(9090));
                assert_eq!(
                    sub.and_then(|s| s.get_one::<String>("api-base-url").cloned()),
                    Some("https://users.example/api".to_string())
                );
            },
        );
    }

    #[test]
    fn test_backend_args() {
        temp_env::with_vars(
            [("USERDIR_BACKEND_PORT", None::<&str>), ("USERDIR_USERS_FILE", None)],
            || {
                let matches =
                    new().get_matches_from(vec!["userdir", "backend", "-f", "/data/users.json"]);
                let sub = matches.subcommand_matches(CMD_BACKEND);
                assert_eq!(sub.and_then(|s| s.get_one::<u16>("port").copied()), Some(5000));
                assert_eq!(
                    sub.and_then(|s| s.get_one::<String>("users-file").cloned()),
                    Some("/data/users.json".to_string())
                );
            },
        );
    }

    #[test]
    fn test_log_dir_is_global() {
        temp_env::with_vars([("USERDIR_LOG_DIR", None::<&str>)], || {
            let matches = new().get_matches_from(vec!["userdir", "backend", "--log-dir", "/tmp/logs"]);
            assert_eq!(
                matches.get_one::<std::path::PathBuf>(logging::ARG_LOG_DIR),
                Some(&std::path::PathBuf::from("/tmp/logs"))
            );

            let matches = new().get_matches_from(vec!["userdir", "frontend"]);
            assert!(matches.get_one::<std::path::PathBuf>(logging::ARG_LOG_DIR).is_none());
        });

        temp_env::with_vars([("USERDIR_LOG_DIR", Some("/var/log/userdir"))], || {
            let matches = new().get_matches_from(vec!["userdir", "frontend"]);
            assert_eq!(
                matches.get_one::<std::path::PathBuf>(logging::ARG_LOG_DIR),
                Some(&std::path::PathBuf::from("/var/log/userdir"))
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("USERDIR_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["userdir", "backend"]);
                assert_eq!(
                    matches
                        .get_one::<u8>(logging::ARG_VERBOSITY)
                        .map(|v| usize::from(*v)),
                    Some(index)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for count in 0..5usize {
            temp_env::with_vars([("USERDIR_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["userdir".to_string()];
                if count > 0 {
                    args.push(format!("-{}", "v".repeat(count)));
                }
                args.push("backend".to_string());

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches
                        .get_one::<u8>(logging::ARG_VERBOSITY)
                        .map(|v| usize::from(*v)),
                    Some(count)
                );
            });
        }
    }
}
