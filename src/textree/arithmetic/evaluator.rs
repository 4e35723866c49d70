//! Recursive-descent evaluator
//!
//! Grammar, lowest to highest precedence:
//!
//! | Rule   | Production                          |
//! |--------|-------------------------------------|
//! | expr   | term (('+' \| '-') term)*           |
//! | term   | factor (('*' \| '/') factor)*       |
//! | factor | NUMBER \| '(' expr ')' \| '-' factor \| '+' factor |
//!
//! Unary signs bind tighter than any binary operator and nest (`--5` is `5`). A run
//! of signs is folded in a loop, so its length never costs stack. Parentheses
//! recurse, and nesting deeper than [MAX_DEPTH] is a parse error.

use super::error::EvalError;
use super::tokens::{tokenize, ExprToken, Lexed};

/// Deepest parenthesis nesting accepted by [evaluate]
pub const MAX_DEPTH: usize = 256;

/// Evaluate a single expression string
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expression).map_err(|(slice, span)| {
        EvalError::parse(format!(
            "unexpected character '{}' at position {}",
            slice, span.start
        ))
    })?;

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    if let Some(extra) = parser.peek() {
        return Err(EvalError::parse(format!(
            "unexpected '{}' at position {}",
            extra.slice, extra.span.start
        )));
    }
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

struct Parser<'a> {
    tokens: Vec<Lexed<'a>>,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Lexed<'a>> {
        self.tokens.get(self.pos)
    }

    fn next_if(&mut self, wanted: &[ExprToken]) -> Option<ExprToken> {
        let token = self.peek()?.token;
        if wanted.contains(&token) {
            self.pos += 1;
            Some(token)
        } else {
            None
        }
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op) = self.next_if(&[ExprToken::Plus, ExprToken::Minus]) {
            let rhs = self.term()?;
            match op {
                ExprToken::Plus => value += rhs,
                _ => value -= rhs,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(op) = self.next_if(&[ExprToken::Star, ExprToken::Slash]) {
            let rhs = self.factor()?;
            match op {
                ExprToken::Star => value *= rhs,
                _ => {
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= rhs;
                }
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        let mut negative = false;
        while let Some(sign) = self.next_if(&[ExprToken::Plus, ExprToken::Minus]) {
            if sign == ExprToken::Minus {
                negative = !negative;
            }
        }
        let value = self.primary()?;
        Ok(if negative { -value } else { value })
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        let Some(lexed) = self.peek() else {
            return Err(EvalError::parse("unexpected end of expression"));
        };
        let (token, slice, start) = (lexed.token, lexed.slice, lexed.span.start);
        self.pos += 1;

        match token {
            ExprToken::OpenParen => {
                if self.depth == MAX_DEPTH {
                    return Err(EvalError::parse("expression nested too deeply"));
                }
                self.depth += 1;
                let value = self.expr()?;
                self.depth -= 1;
                if self.next_if(&[ExprToken::CloseParen]).is_none() {
                    return Err(EvalError::parse(format!(
                        "missing closing parenthesis for '(' at position {}",
                        start
                    )));
                }
                Ok(value)
            }
            ExprToken::Number => slice
                .parse::<f64>()
                .map_err(|_| EvalError::parse(format!("invalid number '{}'", slice))),
            _ => Err(EvalError::parse(format!(
                "expected number at position {}, found '{}'",
                start, slice
            ))),
        }
    }
}
