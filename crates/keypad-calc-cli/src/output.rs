//! Output formatting for key steps, markers and demo surfaces

use crate::config::CliConfig;
use console::style;
use keypad_calc::controller::KeyOutcome;
use keypad_calc::keypad::Key;
use std::io::{self, Write};

/// Renders session output according to the CLI configuration
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    /// Whether to use colors
    pub use_color: bool,
    /// Only print final results
    pub quiet: bool,
    /// Include the outcome name on each step
    pub verbose: bool,
    /// Print markers for ignored keys and failed evaluations
    pub show_errors: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Printer {
    /// Create a printer with default flags
    #[must_use]
    pub const fn new(use_color: bool) -> Self {
        Self {
            use_color,
            quiet: false,
            verbose: false,
            show_errors: false,
        }
    }

    /// Create a printer from CLI configuration
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self {
            use_color: config.color.should_color(),
            quiet: config.verbosity.is_quiet(),
            verbose: config.verbosity.is_verbose(),
            show_errors: config.show_errors,
        }
    }

    /// Print one handled key: `[7] 12+7`
    pub fn step(
        &self,
        out: &mut impl Write,
        key: Key,
        outcome: &KeyOutcome,
        display: &str,
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let key_text = format!("[{key}]");
        let mut line = format!(
            "{} {}",
            style(key_text).cyan().force_styling(self.use_color),
            self.styled_display(outcome, display)
        );
        if self.verbose {
            line.push_str(&format!(
                "  {}",
                style(outcome.kind()).dim().force_styling(self.use_color)
            ));
        }
        if let Some(marker) = self.marker(outcome) {
            line.push_str("  ");
            line.push_str(&marker);
        }
        writeln!(out, "{}", line.trim_end())
    }

    /// Print a display line on its own, shown even in quiet mode
    pub fn display_line(&self, out: &mut impl Write, display: &str) -> io::Result<()> {
        writeln!(out, "{}", style(display).bold().force_styling(self.use_color))
    }

    /// Marker for a rejected key or failed evaluation when errors are shown
    #[must_use]
    pub fn marker(&self, outcome: &KeyOutcome) -> Option<String> {
        if !self.show_errors {
            return None;
        }
        let text = outcome.error_marker()?;
        let styled = match outcome {
            KeyOutcome::EvaluationFailed(_) => style(format!("({text})")).red(),
            _ => style(format!("({text})")).yellow(),
        };
        Some(styled.force_styling(self.use_color).to_string())
    }

    /// Print an error line for input that could not be read as keys
    pub fn input_error(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(
            out,
            "{} {message}",
            style("error:").red().bold().force_styling(self.use_color)
        )
    }

    /// Print a section header
    pub fn header(&self, out: &mut impl Write, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let styled = if self.use_color {
            style(title).bold().underlined().force_styling(true).to_string()
        } else {
            format!("=== {title} ===")
        };
        writeln!(out, "{styled}")
    }

    fn styled_display(&self, outcome: &KeyOutcome, display: &str) -> String {
        let styled = match outcome {
            KeyOutcome::Evaluated(_) => style(display).green().bold(),
            _ => style(display),
        };
        styled.force_styling(self.use_color).to_string()
    }
}
