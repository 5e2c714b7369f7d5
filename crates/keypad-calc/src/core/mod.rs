//! Arithmetic core for the keypad calculator
//!
//! A dedicated evaluator restricted to decimal literals and the four
//! operators `+ - * /`. Nothing else in the buffer is ever interpreted.

pub mod evaluator;
pub mod history;
mod number;
mod operations;
pub mod parser;

pub use number::Number;
pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The buffer is not a valid expression (trailing operator, lone `.`, ...)
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,

    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit the number representation
    #[error("Overflow: result exceeds representable range")]
    Overflow,

    /// A key label outside the keypad's symbol set
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}

impl CalcError {
    /// Create an invalid expression error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidExpression(message.into())
    }
}
