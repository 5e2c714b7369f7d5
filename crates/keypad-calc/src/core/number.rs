//! Numeric values produced by evaluation
//!
//! Integer literals stay integral through `+ - *`, division always yields a
//! float, and a float operand makes the whole operation float. The textual
//! rendering is canonical: it is what lands back in the display buffer, so it
//! must tokenize again as a literal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) of the plain decimal float rendering
const PLAIN_MIN: f64 = 1e-4;
/// Upper bound (exclusive) of the plain decimal float rendering
const PLAIN_MAX: f64 = 1e16;

/// A calculator value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Exact integer value
    Integer(i64),
    /// Floating-point value (always finite once validated)
    Float(f64),
}

impl Number {
    /// Returns the value as `f64`
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns true if this is an integer value
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns true if the value is zero
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Returns the negated value
    #[must_use]
    pub fn negate(self) -> Option<Self> {
        match self {
            Self::Integer(n) => n.checked_neg().map(Self::Integer),
            Self::Float(f) => Some(Self::Float(-f)),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// Renders a float so it always reads as a float literal
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return format_exponent(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// `1e16` -> `1e+16`, `1.5e-5` -> `1.5e-05`
fn format_exponent(value: f64) -> String {
    let raw = format!("{value:e}");
    let Some(idx) = raw.find('e') else {
        return raw;
    };
    let (mantissa, exponent) = (&raw[..idx], &raw[idx + 1..]);
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        Err(_) => raw.clone(),
    }
}
