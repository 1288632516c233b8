//! Keypad vocabulary and layout
//!
//! A [`Key`] is the unit a presentation layer reports when a button is
//! pressed. The [`Keypad`] describes where each button sits, so a renderer
//! can draw the grid without knowing anything about evaluation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operator};

/// A keypad button action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Insert a digit
    ///
    /// Only 0-9 are keypad digits; a session ignores any other value without
    /// touching its state. Build with [`Key::digit`] to stay in range.
    Digit(u8),
    /// Insert an operator
    Operator(Operator),
    /// Clear the input and result
    Clear,
    /// Evaluate the expression
    Equals,
}

impl Key {
    /// Parses a keypad token: `"0"`-`"9"`, `"+"`, `"-"`, `"*"`, `"/"`, `"C"`, `"="`
    pub fn parse(token: &str) -> CalcResult<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                Self::from_char(ch).ok_or_else(|| CalcError::UnknownKey(token.into()))
            }
            _ => Err(CalcError::UnknownKey(token.into())),
        }
    }

    /// Digit key for `value`, or None outside 0-9
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self::Digit(value))
        } else {
            None
        }
    }

    /// Maps a single keypad character to its key
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            _ => ch
                .to_digit(10)
                .map(|d| Self::Digit(d as u8))
                .or_else(|| Operator::from_char(ch).map(Self::Operator)),
        }
    }

    /// Returns the character printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Operator(op) => op.symbol(),
            Self::Clear => 'C',
            Self::Equals => '=',
        }
    }

    /// Returns the character this key inserts into the buffer, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(_) | Self::Operator(_) => Some(self.label()),
            Self::Clear | Self::Equals => None,
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The keypad layout: a 4x4 grid of buttons
/// ```text
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ C ] [ 0 ] [ = ] [ / ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    /// Buttons in row-major order
    keys: Vec<Key>,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn standard() -> Self {
        let keys = vec![
            // Row 1: 1 2 3 +
            Key::Digit(1),
            Key::Digit(2),
            Key::Digit(3),
            Key::Operator(Operator::Add),
            // Row 2: 4 5 6 -
            Key::Digit(4),
            Key::Digit(5),
            Key::Digit(6),
            Key::Operator(Operator::Subtract),
            // Row 3: 7 8 9 *
            Key::Digit(7),
            Key::Digit(8),
            Key::Digit(9),
            Key::Operator(Operator::Multiply),
            // Row 4: C 0 = /
            Key::Clear,
            Key::Digit(0),
            Key::Equals,
            Key::Operator(Operator::Divide),
        ];

        Self { keys, cols: 4 }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.keys.len().div_ceil(self.cols), self.cols)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<Key> {
        if col < self.cols {
            self.keys.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Finds the (row, col) position of the button with the given label
    #[must_use]
    pub fn find(&self, label: char) -> Option<(usize, usize)> {
        self.keys
            .iter()
            .position(|k| k.label() == label)
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// Returns the buttons row by row
    pub fn rows(&self) -> impl Iterator<Item = &[Key]> {
        self.keys.chunks(self.cols)
    }

    /// Returns an iterator over all buttons in row-major order
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().copied()
    }
}
