//! Text structure parsing
//!
//! The processing flow is:
//!
//!     raw text
//!       → DocumentStage   (blank line / indented line separates paragraphs)
//!       → ParagraphStage  (arithmetic rewrite, then sentence boundaries)
//!       → SentenceStage   (whitespace-delimited lexemes)
//!       → LexemeStage     (word and punctuation leaves)
//!
//! The result is a [Node](ast::Node) of kind `Document`. Calling
//! [reconstruct](ast::Node::reconstruct) on it produces canonical text, and the
//! [formats](formats) and [operations](operations) modules consume it read-only.

pub mod arithmetic;
pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod logging;
pub mod operations;
pub mod parsing;
pub mod testing;

pub use ast::{Node, NodeKind, StructuralError, Visitor};
pub use error::TextreeError;
pub use parsing::ParserChain;

/// Parse text with the standard four-stage chain.
pub fn parse(text: &str) -> Node {
    ParserChain::standard().parse(text)
}
