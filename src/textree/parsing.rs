//! Stage parsers
//!
//! Parsing is a chain of four stages. Each stage turns one text fragment into one
//! level of the tree, and hands every sub-fragment to the rest of the chain:
//!
//! | Stage     | Produces  | Splits into        | Separator                                         |
//! |-----------|-----------|--------------------|---------------------------------------------------|
//! | Document  | Document  | paragraphs         | blank line, line starting with a tab or 4+ spaces |
//! | Paragraph | Paragraph | sentences          | terminator + whitespace + uppercase letter        |
//! | Sentence  | Sentence  | lexemes            | whitespace                                        |
//! | Lexeme    | Lexeme    | word/punct leaves  | words are numbers or `\w+`, the rest is punct     |
//!
//! The paragraph stage rewrites arithmetic expressions (see
//! [arithmetic](crate::textree::arithmetic)) before looking for sentence boundaries.
//!
//! The chain is an explicit ordered list owned by [ParserChain]; a stage receives
//! the remaining stages as a slice, so there is no hidden "next" wiring. A stage
//! with no successor returns its composite with no children. Sub-fragments that are
//! empty after trimming never become children.

pub mod chain;
pub mod document;
pub mod lexeme;
pub mod paragraph;
pub mod patterns;
pub mod sentence;
pub mod stage;

pub use chain::ParserChain;
pub use document::DocumentStage;
pub use lexeme::LexemeStage;
pub use paragraph::ParagraphStage;
pub use sentence::SentenceStage;
pub use stage::StageParser;
