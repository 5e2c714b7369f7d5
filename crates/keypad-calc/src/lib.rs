//! Keypad Calculator
//!
//! A four-function keypad calculator reduced to its testable core: a key
//! input controller with two pieces of state, a dedicated arithmetic
//! evaluator for `+ - * /` over decimal literals, and the keypad layout. The
//! label-toggle and password-check demos live in [`demos`] behind small
//! surface traits.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = KeypadController::new();
//! for key in parse_keys("12+7=").unwrap() {
//!     calc.handle_key(key);
//! }
//! assert_eq!(calc.display(), "19");
//!
//! // Consecutive operators are dropped, not substituted
//! calc.handle_key(Key::Clear);
//! calc.press_all(parse_keys("3+-2=").unwrap());
//! assert_eq!(calc.display(), "5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod controller;
pub mod core;
pub mod demos;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::controller::{ControllerConfig, KeyOutcome, KeypadController, RejectReason};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Calculator, Number, Operation};
    pub use crate::demos::{
        CheckResult, LabelToggle, MemoryDialog, MemoryLabel, ModalSurface, PasswordCheck,
        TextSurface,
    };
    pub use crate::driver::{CalculatorDriver, RecordingDriver, Step};
    pub use crate::keypad::{parse_keys, Key, Keypad, KeypadButton};
}
