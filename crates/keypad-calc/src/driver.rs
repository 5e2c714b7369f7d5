//! Front-end driver abstraction
//!
//! A front end delivers keys and renders the buffer. [`CalculatorDriver`]
//! captures exactly that, so the same scripted checks run against the bare
//! controller or a recording wrapper.

use crate::controller::{KeyOutcome, KeypadController};
use crate::core::CalcResult;
use crate::keypad::{parse_keys, Key};
use serde::Serialize;

/// Key source and display sink of a calculator front end
pub trait CalculatorDriver {
    /// Delivers one key event
    fn press(&mut self, key: Key) -> KeyOutcome;

    /// The text currently rendered in the display field
    fn display(&self) -> String;

    /// Delivers compact key text (`"12+7="`) and returns the final display
    fn press_str(&mut self, text: &str) -> CalcResult<String> {
        for key in parse_keys(text)? {
            self.press(key);
        }
        Ok(self.display())
    }
}

impl CalculatorDriver for KeypadController {
    fn press(&mut self, key: Key) -> KeyOutcome {
        self.handle_key(key)
    }

    fn display(&self) -> String {
        KeypadController::display(self).to_string()
    }
}

/// One handled key, as recorded by [`RecordingDriver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key label
    pub key: char,
    /// Outcome name (`appended`, `rejected`, ...)
    pub outcome: String,
    /// Buffer after the key
    pub display: String,
    /// Reason for a rejection or failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Driver that records every key, outcome and resulting display
#[derive(Debug, Default)]
pub struct RecordingDriver {
    controller: KeypadController,
    steps: Vec<Step>,
}

impl RecordingDriver {
    /// Creates a recording driver around a fresh controller
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording driver around an existing controller
    #[must_use]
    pub fn with_controller(controller: KeypadController) -> Self {
        Self {
            controller,
            steps: Vec::new(),
        }
    }

    /// The recorded steps, in order
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The wrapped controller
    #[must_use]
    pub fn controller(&self) -> &KeypadController {
        &self.controller
    }

    /// Consumes the driver, returning controller and steps
    #[must_use]
    pub fn into_parts(self) -> (KeypadController, Vec<Step>) {
        (self.controller, self.steps)
    }
}

impl CalculatorDriver for RecordingDriver {
    fn press(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.controller.handle_key(key);
        let detail = match &outcome {
            KeyOutcome::Rejected(reason) => Some(reason.to_string()),
            KeyOutcome::EvaluationFailed(err) => Some(err.to_string()),
            _ => None,
        };
        self.steps.push(Step {
            key: key.label(),
            outcome: outcome.kind().to_string(),
            display: self.controller.display().to_string(),
            detail,
        });
        outcome
    }

    fn display(&self) -> String {
        self.controller.display().to_string()
    }
}

// ===== Shared scenario checks =====
// These run against ANY CalculatorDriver implementation

/// Verifies the four operations and precedence
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("C12+7=", "19"),
        ("C10-4=", "6"),
        ("C6*7=", "42"),
        ("C20/4=", "5.0"),
        ("C2+3*4=", "14"),
        ("C8-3-2=", "3"),
    ] {
        assert_eq!(driver.press_str(keys).ok().as_deref(), Some(expected), "{keys}");
    }
}

/// Verifies operator rejection leaves the display untouched
pub fn verify_rejections<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    assert_eq!(driver.press_str("+").ok().as_deref(), Some(""));
    assert_eq!(driver.press_str("3+-").ok().as_deref(), Some("3+"));
    assert_eq!(driver.press_str("2=").ok().as_deref(), Some("5"));
}

/// Verifies failed evaluation leaves the display untouched
pub fn verify_failed_evaluation<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    assert_eq!(driver.press_str("9*=").ok().as_deref(), Some("9*"));
    assert_eq!(driver.press_str("C1/0=").ok().as_deref(), Some("1/0"));
    assert_eq!(driver.press_str("C=").ok().as_deref(), Some(""));
}
