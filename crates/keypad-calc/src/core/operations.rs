//! The four keypad operations over [`Number`]

use crate::core::{CalcError, CalcResult, Number};

/// Binary operator on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations, in keypad column order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps an operator symbol back to its operation
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the precedence level (higher binds tighter)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }
}

/// Arithmetic over calculator numbers
///
/// Integer operands use checked arithmetic; mixing in a float, or dividing,
/// moves the computation to `f64`. Results are always finite.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Creates a new calculator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Performs an operation on two operands
    pub fn calculate(&self, a: Number, b: Number, op: Operation) -> CalcResult<Number> {
        match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: Number, b: Number) -> CalcResult<Number> {
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => {
                x.checked_add(y).map(Number::Integer).ok_or(CalcError::Overflow)
            }
            _ => Self::finite(a.as_f64() + b.as_f64()),
        }
    }

    /// Subtraction: a - b
    pub fn subtract(a: Number, b: Number) -> CalcResult<Number> {
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => {
                x.checked_sub(y).map(Number::Integer).ok_or(CalcError::Overflow)
            }
            _ => Self::finite(a.as_f64() - b.as_f64()),
        }
    }

    /// Multiplication: a * b
    pub fn multiply(a: Number, b: Number) -> CalcResult<Number> {
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => {
                x.checked_mul(y).map(Number::Integer).ok_or(CalcError::Overflow)
            }
            _ => Self::finite(a.as_f64() * b.as_f64()),
        }
    }

    /// Division: a / b, always a float
    pub fn divide(a: Number, b: Number) -> CalcResult<Number> {
        if b.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Self::finite(a.as_f64() / b.as_f64())
    }

    fn finite(result: f64) -> CalcResult<Number> {
        if result.is_finite() {
            Ok(Number::Float(result))
        } else {
            Err(CalcError::Overflow)
        }
    }
}
