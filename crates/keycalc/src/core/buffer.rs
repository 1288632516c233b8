//! Expression buffer: how keystrokes accumulate into an expression

use crate::core::Operator;

/// The not-yet-evaluated input string
///
/// Invariant: no two adjacent characters are both operators. An operator
/// pressed right after another one replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl ExpressionBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Applies a digit or operator keystroke
    pub fn press(&mut self, token: char) {
        if Operator::is_operator_char(token) {
            if let Some(last) = self.last_char().filter(|c| Operator::is_operator_char(*c)) {
                tracing::trace!(replaced = %last, with = %token, "collapsing operator");
                self.text.pop();
            }
        }
        self.text.push(token);
    }

    /// Appends a digit
    pub fn push_digit(&mut self, digit: u8) {
        if let Some(ch) = char::from_digit(u32::from(digit), 10) {
            self.press(ch);
        }
    }

    /// Appends an operator, replacing a trailing one
    pub fn push_operator(&mut self, op: Operator) {
        self.press(op.symbol());
    }

    /// Resets the buffer to the empty string
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the buffer contents
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the last character, if any
    #[must_use]
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().last()
    }

    /// Returns the number of characters in the buffer
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for ExpressionBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
