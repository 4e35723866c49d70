//! Token definitions for arithmetic expressions
//!
//! Numbers are greedy runs of digits and dots; whether a run is a valid number is
//! decided by the evaluator, so `1.2.3` reaches it as one token and is rejected
//! there with a precise message.
use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum ExprToken {
    #[regex(r"[0-9.]+")]
    Number,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
}

/// A token together with the source slice and byte range it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed<'a> {
    pub token: ExprToken,
    pub slice: &'a str,
    pub span: Range<usize>,
}

/// Tokenize an expression.
///
/// On an unrecognized character, returns the offending slice and its byte range.
pub fn tokenize(expression: &str) -> Result<Vec<Lexed<'_>>, (&str, Range<usize>)> {
    let mut lexer = ExprToken::lexer(expression);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        match result {
            Ok(token) => tokens.push(Lexed { token, slice, span }),
            Err(()) => return Err((slice, span)),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(expression: &str) -> Vec<ExprToken> {
        tokenize(expression)
            .unwrap()
            .into_iter()
            .map(|lexed| lexed.token)
            .collect()
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            kinds("(1 + 2) * 3 / -4"),
            vec![
                ExprToken::OpenParen,
                ExprToken::Number,
                ExprToken::Plus,
                ExprToken::Number,
                ExprToken::CloseParen,
                ExprToken::Star,
                ExprToken::Number,
                ExprToken::Slash,
                ExprToken::Minus,
                ExprToken::Number,
            ]
        );
    }

    #[test]
    fn test_number_slices() {
        let tokens = tokenize("3.25+10").unwrap();
        assert_eq!(tokens[0].slice, "3.25");
        assert_eq!(tokens[0].span, 0..4);
        assert_eq!(tokens[2].slice, "10");
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(kinds(" \t1\n"), vec![ExprToken::Number]);
        assert!(kinds("   ").is_empty());
    }

    #[test]
    fn test_unknown_character() {
        let err = tokenize("2 + x").unwrap_err();
        assert_eq!(err, ("x", 4..5));
    }
}
