//! Calculator session: the state machine behind the keypad
//!
//! A [`Session`] owns the expression buffer, the last result, the history
//! and the theme flag. Every event runs to completion and leaves the
//! session in a consistent state; renderers read [`Snapshot`]s.

use serde::Serialize;

use crate::core::buffer::ExpressionBuffer;
use crate::core::evaluator::Evaluator;
use crate::core::history::{HistoryEntry, HistoryLog};
use crate::core::{CalcResult, ERROR_TEXT};
use crate::keypad::Key;
use crate::theme::Theme;

/// What the display is currently showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Composing an expression; no result shown
    #[default]
    Idle,
    /// A result or error is shown next to the expression that produced it
    Displaying,
}

/// Read-only view of a session after an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current input text
    pub input: String,
    /// Current result or error text (empty when idle)
    pub result: String,
    /// Display state
    pub state: SessionState,
    /// Current theme
    pub theme: Theme,
    /// History entries, oldest first
    pub history: Vec<HistoryEntry>,
}

/// A single calculator session
#[derive(Debug, Clone, Default)]
pub struct Session {
    buffer: ExpressionBuffer,
    result: String,
    state: SessionState,
    history: HistoryLog,
    theme: Theme,
    evaluator: Evaluator,
}

impl Session {
    /// Creates a new session: empty input, no result, light theme
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session starting in the given theme
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Handles a button press given as a keypad token
    ///
    /// Tokens outside the keypad vocabulary are rejected before any state
    /// is touched.
    pub fn on_button_press(&mut self, token: &str) -> CalcResult<()> {
        let key = Key::parse(token).map_err(|e| {
            tracing::warn!(token, error = %e, "rejected key");
            e
        })?;
        self.press(key);
        Ok(())
    }

    /// Handles a button press
    pub fn press(&mut self, key: Key) {
        tracing::debug!(key = %key, state = ?self.state, "key pressed");
        match key {
            Key::Digit(d) if d > 9 => {
                tracing::warn!(digit = d, "ignored out-of-range digit key");
            }
            Key::Digit(d) => {
                self.buffer.push_digit(d);
                self.show_input();
            }
            Key::Operator(op) => {
                self.buffer.push_operator(op);
                self.show_input();
            }
            Key::Clear => {
                self.buffer.clear();
                self.show_input();
            }
            Key::Equals => self.evaluate(),
        }
    }

    /// Flips the theme; calculation state is untouched
    pub fn on_theme_toggle(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme, "theme toggled");
    }

    fn show_input(&mut self) {
        self.result.clear();
        self.state = SessionState::Idle;
    }

    fn evaluate(&mut self) {
        match self.evaluator.evaluate(self.buffer.as_str()) {
            Ok(result) => {
                self.history.record(self.buffer.as_str(), &result);
                self.result = result;
            }
            Err(_) => {
                self.result = ERROR_TEXT.to_string();
            }
        }
        self.state = SessionState::Displaying;
    }

    /// Returns the current input text
    #[must_use]
    pub fn input(&self) -> &str {
        self.buffer.as_str()
    }

    /// Returns the current result text (empty when nothing is displayed)
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Returns the display state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the current theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the calculation history
    #[must_use]
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Captures the observable state for a renderer
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            input: self.input().to_string(),
            result: self.result.clone(),
            state: self.state,
            theme: self.theme,
            history: self.history.all().to_vec(),
        }
    }
}
