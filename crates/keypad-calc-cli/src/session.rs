//! Subcommand bodies
//!
//! Each runner writes to a caller-supplied sink so tests can capture output
//! without spawning the binary.

use crate::commands::{PasswordArgs, PressArgs};
use crate::error::CliResult;
use crate::output::Printer;
use console::style;
use keypad_calc::core::history::HistoryEntry;
use keypad_calc::demos::{LabelToggle, ModalSurface, PasswordCheck, TextSurface};
use keypad_calc::driver::{CalculatorDriver, RecordingDriver, Step};
use keypad_calc::keypad::{parse_keys, Keypad};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// JSON transcript of a `press` session
#[derive(Debug, Serialize)]
pub struct Transcript<'a> {
    /// Every handled key
    pub steps: &'a [Step],
    /// Successful evaluations, oldest first
    pub history: Vec<&'a HistoryEntry>,
    /// Final display text
    pub display: String,
}

impl<'a> Transcript<'a> {
    /// Snapshot a recording driver
    #[must_use]
    pub fn from_driver(driver: &'a RecordingDriver) -> Self {
        Self {
            steps: driver.steps(),
            history: driver.controller().history().iter().collect(),
            display: driver.display(),
        }
    }
}

/// `press`: feed the keys and print every step
pub fn run_press(printer: &Printer, args: &PressArgs, out: &mut impl Write) -> CliResult<()> {
    let keys = parse_keys(&args.sequence())?;
    debug!(count = keys.len(), "pressing keys");

    let mut driver = RecordingDriver::new();
    for key in keys {
        let outcome = driver.press(key);
        if !args.json {
            printer.step(out, key, &outcome, &driver.display())?;
        }
    }

    if args.json {
        let transcript = Transcript::from_driver(&driver);
        serde_json::to_writer_pretty(&mut *out, &transcript)?;
        writeln!(out)?;
    } else if printer.quiet {
        printer.display_line(out, &driver.display())?;
    }
    Ok(())
}

/// Words that end a `repl` session
const QUIT_WORDS: [&str; 2] = ["q", "quit"];

/// `repl`: each input line is a key sequence; the display is printed after each
pub fn run_repl(printer: &Printer, mut input: impl BufRead, out: &mut impl Write) -> CliResult<()> {
    let mut driver = RecordingDriver::new();
    let mut raw = Vec::new();
    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line,
            Err(e) => {
                printer.input_error(out, &format!("line is not valid UTF-8: {e}"))?;
                continue;
            }
        };
        let trimmed = line.trim();
        if QUIT_WORDS.contains(&trimmed) {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let keys = match parse_keys(trimmed) {
            Ok(keys) => keys,
            Err(e) => {
                printer.input_error(out, &e.to_string())?;
                continue;
            }
        };
        for key in keys {
            let outcome = driver.press(key);
            if let Some(marker) = printer.marker(&outcome) {
                writeln!(out, "[{key}] {marker}")?;
            }
        }
        printer.display_line(out, &driver.display())?;
    }
    info!(
        evaluations = driver.controller().history().len(),
        "repl finished"
    );
    Ok(())
}

/// `layout`: print the keypad grid
pub fn run_layout(printer: &Printer, out: &mut impl Write) -> CliResult<()> {
    let keypad = Keypad::new();
    let (rows, cols) = keypad.dimensions();
    printer.header(
        out,
        &format!("Keypad {rows}x{cols}, {} buttons", keypad.button_count()),
    )?;
    writeln!(out, "{}", keypad.render_text())?;
    Ok(())
}

/// `password`: run the check against console surfaces
pub fn run_password(printer: &Printer, args: &PasswordArgs, out: &mut impl Write) -> CliResult<()> {
    let check = PasswordCheck::with_expected(args.expected.clone());
    let mut label = ConsoleLabel::new(*printer, "result");
    let mut dialog = ConsoleDialog::new(*printer, PasswordCheck::DIALOG_TITLE);

    check.validate(&args.input, &mut label, &mut dialog);
    check.close_dialog(&mut dialog);

    dialog.flush_to(out)?;
    label.flush_to(out)?;
    Ok(())
}

/// `toggle`: press the demo button once
pub fn run_toggle(printer: &Printer, out: &mut impl Write) -> CliResult<()> {
    let mut label = ConsoleLabel::new(*printer, "label");
    LabelToggle::new().action(&mut label);
    label.flush_to(out)?;
    Ok(())
}

/// Text surface that renders every change as a terminal line
#[derive(Debug, Clone)]
pub struct ConsoleLabel {
    printer: Printer,
    name: String,
    text: String,
    pending: Vec<String>,
}

impl ConsoleLabel {
    /// Create an empty label
    #[must_use]
    pub fn new(printer: Printer, name: impl Into<String>) -> Self {
        Self {
            printer,
            name: name.into(),
            text: String::new(),
            pending: Vec::new(),
        }
    }

    /// Write the rendered changes and forget them
    pub fn flush_to(&mut self, out: &mut impl Write) -> CliResult<()> {
        for line in self.pending.drain(..) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl TextSurface for ConsoleLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        let line = if self.printer.quiet {
            self.text.clone()
        } else {
            format!(
                "{}: {}",
                style(&self.name).cyan().force_styling(self.printer.use_color),
                style(&self.text).bold().force_styling(self.printer.use_color)
            )
        };
        self.pending.push(line);
    }

    fn text(&self) -> String {
        self.text.clone()
    }
}

/// Modal surface rendered as a boxed block of terminal lines
#[derive(Debug, Clone)]
pub struct ConsoleDialog {
    printer: Printer,
    title: String,
    message: String,
    open: bool,
    pending: Vec<String>,
}

impl ConsoleDialog {
    /// Create a closed dialog
    #[must_use]
    pub fn new(printer: Printer, title: impl Into<String>) -> Self {
        Self {
            printer,
            title: title.into(),
            message: String::new(),
            open: false,
            pending: Vec::new(),
        }
    }

    /// Write the rendered changes and forget them
    pub fn flush_to(&mut self, out: &mut impl Write) -> CliResult<()> {
        for line in self.pending.drain(..) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl ModalSurface for ConsoleDialog {
    fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn open(&mut self) {
        self.open = true;
        if self.printer.quiet {
            return;
        }
        let color = self.printer.use_color;
        self.pending.push(format!(
            "+ {}",
            style(&self.title).bold().force_styling(color)
        ));
        self.pending.push(format!("| {}", self.message));
        self.pending.push(format!(
            "+ {}",
            style("[Close]").dim().force_styling(color)
        ));
    }

    fn dismiss(&mut self) {
        if self.open && self.printer.verbose {
            self.pending.push(format!("({} closed)", self.title));
        }
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn plain() -> Printer {
        Printer::new(false)
    }

    fn press_args(keys: &str, json: bool) -> PressArgs {
        PressArgs {
            keys: vec![keys.to_string()],
            json,
        }
    }

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ===== press =====

    #[test]
    fn test_press_prints_each_step() {
        let out = capture(|o| run_press(&plain(), &press_args("12+7=", false), o));
        assert_eq!(out, "[1] 1\n[2] 12\n[+] 12+\n[7] 12+7\n[=] 19\n");
    }

    #[test]
    fn test_press_quiet_prints_final_display() {
        let printer = Printer {
            quiet: true,
            ..plain()
        };
        let out = capture(|o| run_press(&printer, &press_args("7.5*2=", false), o));
        assert_eq!(out, "15.0\n");
    }

    #[test]
    fn test_press_rejection_silent() {
        let out = capture(|o| run_press(&plain(), &press_args("3+-2=", false), o));
        assert!(out.contains("[-] 3+\n"));
        assert!(out.ends_with("[=] 5\n"));
    }

    #[test]
    fn test_press_show_errors() {
        let printer = Printer {
            show_errors: true,
            ..plain()
        };
        let out = capture(|o| run_press(&printer, &press_args("5/0=", false), o));
        assert!(out.contains("[=] 5/0  (error: "));
    }

    #[test]
    fn test_press_unknown_key_is_error() {
        let mut buf = Vec::new();
        let err = run_press(&plain(), &press_args("1x", false), &mut buf).unwrap_err();
        assert!(err.to_string().contains("'x'"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_press_json_transcript() {
        let out = capture(|o| run_press(&plain(), &press_args("+5", true), o));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["display"], "5");
        assert_eq!(value["steps"][0]["outcome"], "rejected");
        assert_eq!(value["steps"][1]["display"], "5");
        assert_eq!(value["history"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_press_json_includes_history() {
        let out = capture(|o| run_press(&plain(), &press_args("12+7=", true), o));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["history"][0]["expression"], "12+7");
        assert_eq!(value["history"][0]["result"], 19);
    }

    // ===== repl =====

    #[test]
    fn test_repl_prints_display_per_line() {
        let input = "12+7=\n*2\n=\nquit\n9\n";
        let out = capture(|o| run_repl(&plain(), input.as_bytes(), o));
        assert_eq!(out, "19\n19*2\n38\n");
    }

    #[test]
    fn test_repl_skips_blank_and_reports_bad_lines() {
        let input = "\n1?\n4\n";
        let out = capture(|o| run_repl(&plain(), input.as_bytes(), o));
        assert!(out.starts_with("error: Unknown key"));
        assert!(out.ends_with("4\n"));
    }

    #[test]
    fn test_repl_continues_after_invalid_utf8() {
        let input: &[u8] = b"1+1=\n\xff\xfe\n2\n";
        let out = capture(|o| run_repl(&plain(), input, o));
        assert!(out.starts_with("2\nerror: line is not valid UTF-8"), "{out}");
        assert!(out.ends_with("\n22\n"), "{out}");
    }

    #[test]
    fn test_repl_last_line_without_newline() {
        let out = capture(|o| run_repl(&plain(), "3*3=".as_bytes(), o));
        assert_eq!(out, "9\n");
    }

    #[test]
    fn test_repl_markers_when_shown() {
        let printer = Printer {
            show_errors: true,
            ..plain()
        };
        let out = capture(|o| run_repl(&printer, "+\n".as_bytes(), o));
        assert_eq!(out, "[+] (ignored: operator on empty display)\n\n");
    }

    #[test]
    fn test_repl_ends_at_eof() {
        let out = capture(|o| run_repl(&plain(), "C\n".as_bytes(), o));
        assert_eq!(out, "\n");
    }

    // ===== layout =====

    #[test]
    fn test_layout_lists_every_key() {
        let out = capture(|o| run_layout(&plain(), o));
        assert!(out.starts_with("=== Keypad 5x4, 17 buttons ===\n"));
        for key in keypad_calc::keypad::Key::ALL {
            assert!(out.contains(key.label()), "missing {key}");
        }
    }

    // ===== demos =====

    #[test]
    fn test_password_success() {
        let args = PasswordArgs {
            input: "root".into(),
            expected: "root".into(),
        };
        let out = capture(|o| run_password(&plain(), &args, o));
        assert_eq!(
            out,
            "+ Password check\n| Success !\n+ [Close]\nresult: Success\n"
        );
    }

    #[test]
    fn test_password_fail_quiet() {
        let printer = Printer {
            quiet: true,
            ..plain()
        };
        let args = PasswordArgs {
            input: "admin".into(),
            expected: "root".into(),
        };
        let out = capture(|o| run_password(&printer, &args, o));
        assert_eq!(out, "Fail\n");
    }

    #[test]
    fn test_password_verbose_reports_close() {
        let printer = Printer {
            verbose: true,
            ..plain()
        };
        let args = PasswordArgs {
            input: "x".into(),
            expected: "root".into(),
        };
        let out = capture(|o| run_password(&printer, &args, o));
        assert!(out.contains("(Password check closed)"));
    }

    #[test]
    fn test_toggle_sets_label() {
        let out = capture(|o| run_toggle(&plain(), o));
        assert_eq!(out, format!("label: {}\n", LabelToggle::DEFAULT_MESSAGE));
    }

    #[test]
    fn test_console_dialog_state() {
        let mut dialog = ConsoleDialog::new(plain(), "t");
        assert!(!dialog.is_open());
        dialog.open();
        assert!(dialog.is_open());
        dialog.dismiss();
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_console_label_text() {
        let mut label = ConsoleLabel::new(plain(), "l");
        label.set_text("hi");
        assert_eq!(label.text(), "hi");
    }
}
