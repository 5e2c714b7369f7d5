//! Keypad input controller
//!
//! Owns the display buffer plus two pieces of state: the last accepted key
//! and whether it was an operator. Every key is handled to completion and
//! reported back as a [`KeyOutcome`]; nothing here panics or propagates an
//! evaluation failure to the caller.
//!
//! Invariants held for every key sequence:
//! - the buffer never contains two adjacent operator characters;
//! - a buffer composed from keys never starts with an operator;
//! - after a successful `=`, the buffer holds only the rendered result.

use crate::core::evaluator::Evaluator;
use crate::core::history::History;
use crate::core::{CalcError, CalcResult, Number};
use crate::keypad::Key;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Why an operator key was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// An expression cannot begin with a binary operator
    EmptyBuffer,
    /// The previous key was already an operator
    ConsecutiveOperator,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBuffer => write!(f, "operator on empty display"),
            Self::ConsecutiveOperator => write!(f, "consecutive operator"),
        }
    }
}

/// What handling a key did to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// The key's label was appended
    Appended,
    /// Buffer and state were reset
    Cleared,
    /// The key was ignored; buffer and state unchanged
    Rejected(RejectReason),
    /// `=` on an empty buffer
    Unchanged,
    /// The buffer was replaced by the result
    Evaluated(Number),
    /// Evaluation failed; buffer and state unchanged
    EvaluationFailed(CalcError),
}

impl KeyOutcome {
    /// Returns true if the buffer text changed
    #[must_use]
    pub const fn changed_display(&self) -> bool {
        matches!(self, Self::Appended | Self::Cleared | Self::Evaluated(_))
    }

    /// Stable lowercase name of the outcome
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Appended => "appended",
            Self::Cleared => "cleared",
            Self::Rejected(_) => "rejected",
            Self::Unchanged => "unchanged",
            Self::Evaluated(_) => "evaluated",
            Self::EvaluationFailed(_) => "failed",
        }
    }

    /// Short marker for feedback surfaces, `None` for normal outcomes
    #[must_use]
    pub fn error_marker(&self) -> Option<String> {
        match self {
            Self::Rejected(reason) => Some(format!("ignored: {reason}")),
            Self::EvaluationFailed(err) => Some(format!("error: {err}")),
            _ => None,
        }
    }
}

/// Controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Maximum evaluations kept in history
    pub history_capacity: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            history_capacity: History::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl ControllerConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

/// The keypad calculator's state machine
#[derive(Debug)]
pub struct KeypadController {
    buffer: String,
    last_key: Option<Key>,
    last_was_operator: bool,
    evaluator: Evaluator,
    history: History,
}

impl Default for KeypadController {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadController {
    /// Creates a controller with an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    /// Creates a controller with custom settings
    #[must_use]
    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            buffer: String::new(),
            last_key: None,
            last_was_operator: false,
            evaluator: Evaluator::new(),
            history: History::with_capacity(config.history_capacity),
        }
    }

    /// The current buffer text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.buffer
    }

    /// The last accepted input key
    #[must_use]
    pub const fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    /// Whether the last accepted input key was an operator
    #[must_use]
    pub const fn last_was_operator(&self) -> bool {
        self.last_was_operator
    }

    /// Successful evaluations, oldest first
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handles one key event
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        debug!(key = %key, display = %self.buffer, "key pressed");

        match key {
            Key::Clear => {
                self.clear();
                KeyOutcome::Cleared
            }
            Key::Equals => self.evaluate(),
            _ if key.is_operator() && self.buffer.is_empty() => {
                debug!(key = %key, "operator rejected on empty display");
                KeyOutcome::Rejected(RejectReason::EmptyBuffer)
            }
            _ if key.is_operator() && self.last_was_operator => {
                debug!(key = %key, "consecutive operator rejected");
                KeyOutcome::Rejected(RejectReason::ConsecutiveOperator)
            }
            _ => {
                self.buffer.push(key.label());
                self.last_key = Some(key);
                self.last_was_operator = key.is_operator();
                KeyOutcome::Appended
            }
        }
    }

    /// Evaluates the buffer, replacing it with the result on success
    ///
    /// Failures leave buffer and state untouched and come back as
    /// [`KeyOutcome::EvaluationFailed`].
    pub fn evaluate(&mut self) -> KeyOutcome {
        if self.buffer.is_empty() {
            return KeyOutcome::Unchanged;
        }

        match self.try_evaluate() {
            Ok(value) => KeyOutcome::Evaluated(value),
            Err(err) => {
                warn!(expression = %self.buffer, error = %err, "evaluation failed");
                KeyOutcome::EvaluationFailed(err)
            }
        }
    }

    /// Evaluates the buffer, returning the raw error on failure
    ///
    /// The buffer is only replaced when evaluation succeeds.
    pub fn try_evaluate(&mut self) -> CalcResult<Number> {
        let value = self.evaluator.evaluate_str(&self.buffer)?;
        let rendered = value.to_string();
        debug!(expression = %self.buffer, result = %rendered, "evaluated");
        self.history.record(&self.buffer, value);
        self.buffer = rendered;
        Ok(value)
    }

    /// Resets buffer and state
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_key = None;
        self.last_was_operator = false;
    }

    /// Feeds a key sequence, returning the buffer after each key
    pub fn press_all<I>(&mut self, keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter()
            .map(|key| {
                self.handle_key(key);
                self.buffer.clone()
            })
            .collect()
    }
}
