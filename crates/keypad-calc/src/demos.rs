//! The two companion demos: a label toggle and a password check
//!
//! Both are expressed against small capability traits instead of a widget
//! toolkit, so any front end (or a test) can provide the surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// A display surface whose text can be replaced
pub trait TextSurface {
    /// Replaces the displayed text
    fn set_text(&mut self, text: &str);

    /// Returns the displayed text
    fn text(&self) -> String;
}

/// A modal confirmation surface
pub trait ModalSurface {
    /// Sets the message shown in the dialog body
    fn set_message(&mut self, message: &str);

    /// Shows the dialog
    fn open(&mut self);

    /// Hides the dialog
    fn dismiss(&mut self);

    /// Whether the dialog is currently shown
    fn is_open(&self) -> bool;
}

/// In-memory text surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLabel {
    text: String,
}

impl MemoryLabel {
    /// Creates a label with initial text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSurface for MemoryLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn text(&self) -> String {
        self.text.clone()
    }
}

/// In-memory modal surface that counts how often it was opened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDialog {
    message: String,
    open: bool,
    times_opened: usize,
}

impl MemoryDialog {
    /// Creates a closed dialog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How many times `open` was called
    #[must_use]
    pub const fn times_opened(&self) -> usize {
        self.times_opened
    }
}

impl ModalSurface for MemoryDialog {
    fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn open(&mut self) {
        self.open = true;
        self.times_opened += 1;
    }

    fn dismiss(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Button that replaces a label's text when pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelToggle {
    message: String,
}

impl Default for LabelToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelToggle {
    /// Text shown after the button is pressed
    pub const DEFAULT_MESSAGE: &'static str = "This text is displayed after pressing button";

    /// Creates a toggle with the default message
    #[must_use]
    pub fn new() -> Self {
        Self::with_message(Self::DEFAULT_MESSAGE)
    }

    /// Creates a toggle with a custom message
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Button action: writes the message into the label
    pub fn action(&self, label: &mut impl TextSurface) {
        debug!(message = %self.message, "label toggled");
        label.set_text(&self.message);
    }
}

/// Outcome of a password check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckResult {
    /// Input matched
    Success,
    /// Input did not match
    Fail,
}

impl CheckResult {
    /// Text for the dialog body
    #[must_use]
    pub const fn dialog_text(self) -> &'static str {
        match self {
            Self::Success => "Success !",
            Self::Fail => "Fail !",
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// Single-field password form
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    expected: String,
}

impl fmt::Debug for PasswordCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCheck")
            .field("expected", &"<redacted>")
            .finish()
    }
}

impl Default for PasswordCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordCheck {
    /// Password accepted by the stock form
    pub const DEFAULT_PASSWORD: &'static str = "root";

    /// Title of the confirmation dialog
    pub const DIALOG_TITLE: &'static str = "Password check";

    /// Creates a check against the default password
    #[must_use]
    pub fn new() -> Self {
        Self::with_expected(Self::DEFAULT_PASSWORD)
    }

    /// Creates a check against a custom password
    #[must_use]
    pub fn with_expected(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Compares the input, writes the result label and opens the dialog
    pub fn validate(
        &self,
        input: &str,
        result_label: &mut impl TextSurface,
        dialog: &mut impl ModalSurface,
    ) -> CheckResult {
        let result = if input == self.expected {
            CheckResult::Success
        } else {
            CheckResult::Fail
        };
        info!(result = %result, "password checked");

        dialog.set_message(result.dialog_text());
        dialog.open();
        result_label.set_text(&result.to_string());
        result
    }

    /// The dialog's close button
    pub fn close_dialog(&self, dialog: &mut impl ModalSurface) {
        dialog.dismiss();
    }
}
