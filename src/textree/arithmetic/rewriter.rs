//! Text rewrite pass for embedded expressions
//!
//! Two passes, applied in order:
//!
//! 1. Parenthesized: `(` + digits/operators/whitespace containing at least one
//!    operator + `)`, with no parenthesis inside. The whole span, parentheses
//!    included, is replaced by the value of the inner expression.
//! 2. Bare: a number followed by one or more (operator, number) pairs.
//!
//! Each pass sweeps the text left to right and substitutes successful matches by
//! their byte span, so duplicate literal expressions elsewhere in the text are never
//! touched by mistake. Substituting can create new matches (`((1+2)*3)` becomes
//! `(3.0*3)`), so a pass sweeps again until a sweep substitutes nothing. Matches
//! that fail to evaluate are left as they are and do not trigger another sweep.

use super::error::EvalError;
use super::evaluator::evaluate;
use super::value::format_value;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Innermost parenthesized expression; group 1 is the expression without parens
static PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]*[+\-*/][^()]*)\)").unwrap());

/// Bare expression: number (op number)+
static BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]+(?:\.[0-9]+)?(?:\s*[+\-*/]\s*[0-9]+(?:\.[0-9]+)?)+\b").unwrap()
});

/// An expression that was substituted
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    pub expression: String,
    pub value: f64,
}

/// An expression that was found but left untouched
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    pub expression: String,
    pub error: EvalError,
}

/// Result of rewriting a text fragment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rewrite {
    pub text: String,
    pub replaced: Vec<Replacement>,
    pub skipped: Vec<Skipped>,
}

#[derive(Clone, Copy)]
enum Pass {
    Parenthesized,
    Bare,
}

impl Pass {
    fn pattern(self) -> &'static Regex {
        match self {
            Pass::Parenthesized => &*PARENTHESIZED,
            Pass::Bare => &*BARE,
        }
    }

    /// Capture group holding the expression to evaluate
    fn group(self) -> usize {
        match self {
            Pass::Parenthesized => 1,
            Pass::Bare => 0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Pass::Parenthesized => "parenthesized",
            Pass::Bare => "bare",
        }
    }
}

/// Finds arithmetic expressions in text and replaces them with their value
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticRewriter;

impl ArithmeticRewriter {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite every evaluable expression in `text`
    pub fn rewrite(&self, text: &str) -> Rewrite {
        let mut rewrite = Rewrite {
            text: text.to_string(),
            ..Rewrite::default()
        };
        if text.is_empty() {
            return rewrite;
        }
        for pass in [Pass::Parenthesized, Pass::Bare] {
            run_pass(pass, &mut rewrite);
        }
        rewrite
    }

    /// Shorthand for callers that only need the rewritten text
    pub fn process(&self, text: &str) -> String {
        self.rewrite(text).text
    }
}

fn run_pass(pass: Pass, rewrite: &mut Rewrite) {
    loop {
        let (next, skipped, substituted) = sweep(pass, &rewrite.text, &mut rewrite.replaced);
        rewrite.text = next;
        if !substituted {
            // Only the final sweep's failures are still present in the text
            for skip in &skipped {
                warn!(
                    pass = pass.name(),
                    expression = %skip.expression,
                    error = %skip.error,
                    "failed to evaluate expression"
                );
            }
            rewrite.skipped.extend(skipped);
            return;
        }
    }
}

fn sweep(pass: Pass, text: &str, replaced: &mut Vec<Replacement>) -> (String, Vec<Skipped>, bool) {
    let mut out = String::with_capacity(text.len());
    let mut skipped = Vec::new();
    let mut last = 0;
    let mut substituted = false;

    for caps in pass.pattern().captures_iter(text) {
        let (Some(whole), Some(expr)) = (caps.get(0), caps.get(pass.group())) else {
            continue;
        };
        match evaluate(expr.as_str()) {
            Ok(value) => {
                debug!(
                    pass = pass.name(),
                    expression = expr.as_str(),
                    value,
                    "evaluated expression"
                );
                out.push_str(&text[last..whole.start()]);
                out.push_str(&format_value(value));
                last = whole.end();
                substituted = true;
                replaced.push(Replacement {
                    expression: expr.as_str().to_string(),
                    value,
                });
            }
            Err(error) => skipped.push(Skipped {
                expression: expr.as_str().to_string(),
                error,
            }),
        }
    }
    out.push_str(&text[last..]);
    (out, skipped, substituted)
}
