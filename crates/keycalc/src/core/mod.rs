//! Calculator core: input composition, parsing, evaluation and history
//!
//! Everything in here is presentation-free. The session layer composes
//! these pieces; renderers only ever see strings.

pub mod buffer;
pub mod evaluator;
pub mod history;
mod operations;
pub mod parser;

pub use operations::{Calculator, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Text shown in the result field whenever an expression cannot be evaluated
pub const ERROR_TEXT: &str = "Error";

/// Calculator error types
///
/// Every variant except [`CalcError::UnknownKey`] is an evaluation error:
/// the session recovers it locally and shows [`ERROR_TEXT`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN or other)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// Token outside the keypad vocabulary
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}
