//! keypad-calc CLI library
//!
//! Command-line front end for the keypad calculator: argument parsing,
//! configuration, logging setup and the subcommand bodies.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, PasswordArgs, PressArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Printer;

/// Build configuration from parsed arguments
#[must_use]
pub fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.clone().into())
        .with_show_errors(cli.show_errors)
}

/// Dispatch a parsed command line, writing results to `out`
pub fn execute(cli: Cli, out: &mut impl std::io::Write) -> CliResult<()> {
    let config = build_config(&cli);
    let printer = Printer::from_config(&config);
    tracing::debug!(?config, "running command");

    match cli.command {
        Commands::Press(args) => session::run_press(&printer, &args, out),
        Commands::Repl => session::run_repl(&printer, std::io::stdin().lock(), out),
        Commands::Layout => session::run_layout(&printer, out),
        Commands::Password(args) => session::run_password(&printer, &args, out),
        Commands::Toggle => session::run_toggle(&printer, out),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::parse_from(["keypad-calc", "layout"]);
        let config = build_config(&cli);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(!config.show_errors);
    }

    #[test]
    fn test_build_config_flags() {
        let cli = Cli::parse_from(["keypad-calc", "-q", "--color", "never", "--show-errors", "toggle"]);
        let config = build_config(&cli);
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert_eq!(config.color, ColorChoice::Never);
        assert!(config.show_errors);
    }

    #[test]
    fn test_execute_press() {
        let cli = Cli::parse_from(["keypad-calc", "--color", "never", "press", "9/3="]);
        let mut out = Vec::new();
        execute(cli, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("[=] 3.0\n"));
    }

    #[test]
    fn test_execute_press_error() {
        let cli = Cli::parse_from(["keypad-calc", "press", "2%"]);
        let err = execute(cli, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Calc(_)));
    }
}
