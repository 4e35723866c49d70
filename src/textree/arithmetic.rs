//! Arithmetic expressions embedded in text
//!
//! Before a paragraph is split into sentences, numeric expressions inside it are
//! replaced with their computed value:
//!
//!     "Result is (2+3) points."  →  "Result is 5.0 points."
//!     "Result is 2+2*2 points."  →  "Result is 6.0 points."
//!
//! The module is layered:
//! - [tokens]: logos lexer over a single expression string
//! - [evaluator]: recursive-descent evaluation with the usual precedence
//!   (`factor := NUMBER | '(' expr ')' | '-' factor | '+' factor`,
//!   `term := factor (('*'|'/') factor)*`, `expr := term (('+'|'-') term)*`)
//! - [rewriter]: finds expressions in text (parenthesized pass, then bare pass) and
//!   substitutes them by span
//! - [value]: canonical decimal rendering of a result
//!
//! An expression that fails to evaluate (syntax error, division by zero, overflow)
//! is left in the text untouched; it never aborts the surrounding parse.

pub mod error;
pub mod evaluator;
pub mod rewriter;
pub mod tokens;
pub mod value;

pub use error::EvalError;
pub use evaluator::evaluate;
pub use rewriter::{ArithmeticRewriter, Replacement, Rewrite, Skipped};
pub use value::format_value;
