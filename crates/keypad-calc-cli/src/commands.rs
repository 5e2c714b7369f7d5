//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use keypad_calc::demos::PasswordCheck;

/// keypad-calc: drive the four-function keypad calculator from a terminal
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only print the final display)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Show a marker when a key is ignored or an evaluation fails
    #[arg(long, global = true)]
    pub show_errors: bool,

    /// Emit log lines on stderr as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display after each one
    Press(PressArgs),

    /// Read key sequences from stdin, one line at a time
    Repl,

    /// Print the keypad layout
    Layout,

    /// Run the password check demo
    Password(PasswordArgs),

    /// Run the label toggle demo
    Toggle,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Keys to press, e.g. `12+7=` or `5 -3 =` (whitespace between keys is
    /// ignored; flags must come before the keys)
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the session as a JSON transcript
    #[arg(long)]
    pub json: bool,
}

impl PressArgs {
    /// All key arguments joined into one sequence
    #[must_use]
    pub fn sequence(&self) -> String {
        self.keys.concat()
    }
}

/// Arguments for the password command
#[derive(Parser, Debug)]
pub struct PasswordArgs {
    /// Text typed into the password field
    pub input: String,

    /// Password the input is checked against
    #[arg(long, default_value = PasswordCheck::DEFAULT_PASSWORD)]
    pub expected: String,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
