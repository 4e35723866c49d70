//! Regex patterns shared by the stage parsers
//!
//! The regex crate has no look-around, so sentence boundaries are matched as
//! terminator + whitespace + uppercase letter, with the whitespace in a capture
//! group: the sentence ends before the group and the next one starts after it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Blank line, a line beginning with a tab, or a line indented by 4+ whitespace
pub static PARAGRAPH_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n|\n\t|\n\s{4,}").unwrap());

/// Sentence terminator, whitespace (group 1), then an uppercase Latin or Cyrillic letter
pub static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?…](\s+)[A-ZА-ЯЁ]").unwrap());

/// Whitespace-delimited token
pub static LEXEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

/// Decimal number or run of word characters
pub static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\.[0-9]+|\w+").unwrap());
