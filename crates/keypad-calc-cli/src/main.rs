//! keypad-calc: four-function keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc press 12+7=            # Print the display after each key
//! keypad-calc press --json 3+-2=     # JSON transcript with history
//! keypad-calc repl                   # One key sequence per line
//! keypad-calc layout                 # Show the keypad
//! keypad-calc password root          # Password check demo
//! ```

use clap::Parser;
use keypad_calc_cli::{execute, logging, Cli, CliResult, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose), cli.log_json)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}
