//! Core expression engine
//!
//! The engine owns the expression text and the "just evaluated" flag. The
//! evaluator, parser and formatter below it are pure functions of a string.

pub mod engine;
pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;

pub use engine::ExpressionEngine;
pub use operations::Operator;

use thiserror::Error;

/// Result type for evaluation
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons an expression could not be turned into a result.
///
/// Every variant is terminal for the current expression and is shown to the
/// user as the same error indicator. The variant only reaches diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Expression contains a character outside the arithmetic alphabet
    #[error("invalid character {0:?} in expression")]
    InvalidCharacter(char),
    /// Evaluation produced infinity or NaN
    #[error("result is not finite: {0}")]
    NonFiniteResult(f64),
    /// Expression is syntactically invalid
    #[error("invalid expression: {0}")]
    EvaluationFailure(String),
}

impl CalcError {
    /// Creates an evaluation failure from any message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::EvaluationFailure(message.into())
    }

    /// Short, stable name of the error kind for structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCharacter(_) => "invalid_character",
            Self::NonFiniteResult(_) => "non_finite_result",
            Self::EvaluationFailure(_) => "evaluation_failure",
        }
    }
}

/// Returns true for characters allowed in a stored expression
#[must_use]
pub const fn is_expression_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.')
}
