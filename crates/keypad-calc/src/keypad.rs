//! Keypad keys and their grid layout
//!
//! The key set is fixed: ten digits, the decimal point, four operators,
//! clear and equals. Layout:
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ . ] [ 0 ] [ C ] [ + ]
//! [          =          ]
//! ```

use crate::core::{CalcError, Operation};
use std::fmt;
use std::str::FromStr;

/// A single key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// One of `+ - * /`
    Operator(Operation),
    /// Clears the buffer and controller state
    Clear,
    /// Evaluates the buffer
    Equals,
}

impl Key {
    /// Every key on the keypad
    pub const ALL: [Self; 17] = [
        Self::Digit(0),
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Decimal,
        Self::Operator(Operation::Add),
        Self::Operator(Operation::Subtract),
        Self::Operator(Operation::Multiply),
        Self::Operator(Operation::Divide),
        Self::Clear,
        Self::Equals,
    ];

    /// Returns the key's label as it appears on the button and in the buffer
    #[must_use]
    pub fn label(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Operator(op) => op.symbol(),
            Self::Clear => 'C',
            Self::Equals => '=',
        }
    }

    /// Maps a label back to its key
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            'C' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            _ => Operation::from_symbol(c).map(Self::Operator),
        }
    }

    /// Returns true for `+ - * /`
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true for keys whose label is appended to the buffer
    #[must_use]
    pub const fn is_input(self) -> bool {
        !matches!(self, Self::Clear | Self::Equals)
    }

    /// Element-style identifier for the button (`btn-7`, `btn-plus`, ...)
    #[must_use]
    pub fn id(self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op_name(op)),
            Self::Clear => "btn-clear".to_string(),
            Self::Equals => "btn-equals".to_string(),
        }
    }
}

fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| CalcError::UnknownKey(s.to_string())),
            _ => Err(CalcError::UnknownKey(s.to_string())),
        }
    }
}

/// Splits compact key text (`"12+7="`) into keys, ignoring whitespace
pub fn parse_keys(input: &str) -> Result<Vec<Key>, CalcError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_char(c).ok_or_else(|| CalcError::UnknownKey(c.to_string())))
        .collect()
}

/// A button placed on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button emits
    pub key: Key,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button spans
    pub span: usize,
}

impl KeypadButton {
    /// Creates a single-cell button
    #[must_use]
    pub const fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            key,
            row,
            col,
            span: 1,
        }
    }

    /// Creates a button spanning `span` columns
    #[must_use]
    pub const fn wide(key: Key, row: usize, span: usize) -> Self {
        Self {
            key,
            row,
            col: 0,
            span,
        }
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The calculator keypad: a 4x4 grid plus a full-width `=` row
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    const ORDER: [[char; 4]; 4] = [
        ['7', '8', '9', '/'],
        ['4', '5', '6', '*'],
        ['1', '2', '3', '-'],
        ['.', '0', 'C', '+'],
    ];

    /// Width of one rendered cell, `[ x ]`
    const CELL_WIDTH: usize = 5;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let cols = Self::ORDER[0].len();
        let mut buttons: Vec<KeypadButton> = Self::ORDER
            .iter()
            .enumerate()
            .flat_map(|(row, labels)| {
                labels.iter().enumerate().filter_map(move |(col, &label)| {
                    Key::from_char(label).map(|key| KeypadButton::new(key, row, col))
                })
            })
            .collect();
        buttons.push(KeypadButton::wide(Key::Equals, Self::ORDER.len(), cols));

        Self {
            buttons,
            rows: Self::ORDER.len() + 1,
            cols,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the button for a key
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Renders the keypad as plain text, one line per row
    #[must_use]
    pub fn render_text(&self) -> String {
        (0..self.rows)
            .map(|row| {
                self.buttons
                    .iter()
                    .filter(|b| b.row == row)
                    .map(|b| {
                        // spanned cells absorb the single-space gutters between them
                        let width = b.span * Self::CELL_WIDTH + (b.span - 1);
                        format!("[{:^inner$}]", b.key.label(), inner = width - 2)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
