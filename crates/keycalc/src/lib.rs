//! keycalc - keypad calculator core
//!
//! Turns keypad presses into expressions, evaluates them with a
//! constrained arithmetic parser and keeps a running history. Rendering is
//! left to whatever front end drives a [`Session`](session::Session).
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut session = Session::new();
//! for token in ["7", "+", "8", "="] {
//!     session.on_button_press(token).unwrap();
//! }
//! assert_eq!(session.result(), "15");
//! assert_eq!(session.history().all()[0].display(), "7+8 = 15");
//!
//! // Failures are a normal outcome, shown as "Error"
//! session.on_button_press("C").unwrap();
//! for token in ["9", "0", "/", "0", "="] {
//!     session.on_button_press(token).unwrap();
//! }
//! assert_eq!(session.result(), "Error");
//! assert_eq!(session.history().len(), 1);
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

pub mod core;
pub mod driver;
pub mod keypad;
pub mod session;
pub mod theme;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::buffer::ExpressionBuffer;
    pub use crate::core::evaluator::{format_number, EvaluationResult, Evaluator};
    pub use crate::core::history::{HistoryEntry, HistoryLog};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Calculator, Operator, ERROR_TEXT};
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{Key, Keypad};
    pub use crate::session::{Session, SessionState, Snapshot};
    pub use crate::theme::{Palette, Theme};
}
