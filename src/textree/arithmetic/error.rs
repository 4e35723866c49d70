//! Evaluation errors

use thiserror::Error;

/// Why an expression could not be evaluated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Malformed expression: missing operand, unbalanced parenthesis, trailing input
    #[error("parse error: {message}")]
    Parse { message: String },
    /// Right-hand side of `/` evaluated to exactly zero
    #[error("division by zero")]
    DivisionByZero,
    /// The result overflowed to infinity
    #[error("result is not a finite number")]
    NonFinite,
}

impl EvalError {
    pub fn parse(message: impl Into<String>) -> Self {
        EvalError::Parse {
            message: message.into(),
        }
    }
}
