//! Find the sentences that contain the longest word

use super::registry::{Operation, OperationError, OperationReport};
use crate::textree::ast::{Node, NodeKind};
use std::fmt::Write;
use tracing::debug;

/// A sentence whose longest word has the maximum length in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestWordMatch {
    pub sentence: String,
    pub word: String,
    /// Length in characters
    pub length: usize,
}

/// All sentences tied for the longest word, in document order.
///
/// Within a sentence the first word of maximum length wins. Sentences without
/// words are ignored.
pub fn sentences_with_longest_word(node: &Node) -> Vec<LongestWordMatch> {
    let candidates: Vec<LongestWordMatch> = sentences(node)
        .into_iter()
        .filter_map(|sentence| {
            let mut longest: Option<(&str, usize)> = None;
            for word in sentence.descendants_of_kind(NodeKind::Word) {
                let Some(text) = word.text() else { continue };
                let length = text.chars().count();
                if longest.map_or(true, |(_, best)| length > best) {
                    longest = Some((text, length));
                }
            }
            longest.map(|(word, length)| LongestWordMatch {
                sentence: sentence.reconstruct(),
                word: word.to_string(),
                length,
            })
        })
        .collect();

    let max = candidates.iter().map(|m| m.length).max().unwrap_or(0);
    candidates.into_iter().filter(|m| m.length == max).collect()
}

/// Sentences of `node`, including `node` itself when it is one
fn sentences(node: &Node) -> Vec<&Node> {
    if node.kind() == NodeKind::Sentence {
        return vec![node];
    }
    node.descendants_of_kind(NodeKind::Sentence)
        .into_iter()
        .map(|sentence| sentence.as_ref())
        .collect()
}

pub struct LongestWord;

impl Operation for LongestWord {
    fn name(&self) -> &str {
        "longest-word"
    }

    fn description(&self) -> &str {
        "Find the sentences containing the longest word of the text"
    }

    fn execute(&self, node: &Node) -> Result<OperationReport, OperationError> {
        let title = "Sentences with the longest word";
        let matches = sentences_with_longest_word(node);
        let Some(first) = matches.first() else {
            return Ok(OperationReport::new(title, "No words found.\n"));
        };

        let mut body = format!("Longest word length: {} characters\n\n", first.length);
        for found in &matches {
            debug!(word = %found.word, length = found.length, "found longest word");
            let _ = writeln!(
                body,
                "Sentence: {}\nLongest word: \"{}\" ({} characters)\n",
                found.sentence, found.word, found.length
            );
        }
        Ok(OperationReport::new(title, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textree::parse;

    #[test]
    fn test_ties_are_all_reported() {
        let doc = parse("The cat sat. A small dog ran. Three big rocks.");
        let matches = sentences_with_longest_word(&doc);
        let words: Vec<_> = matches.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["small", "Three"]);
        assert!(matches.iter().all(|m| m.length == 5));
    }

    #[test]
    fn test_length_counts_characters() {
        // "длинное" is 7 chars but 14 bytes
        let doc = parse("Очень длинное. Abcdefgh.");
        let matches = sentences_with_longest_word(&doc);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "Abcdefgh");
        assert_eq!(matches[0].sentence, "Abcdefgh.");
    }

    #[test]
    fn test_decimal_counts_as_word() {
        let matches = sentences_with_longest_word(&parse("Pi is 3.14159 roughly."));
        assert_eq!(matches[0].word, "3.14159");
    }

    #[test]
    fn test_empty_text() {
        let report = LongestWord.execute(&parse("")).unwrap();
        assert_eq!(report.body, "No words found.\n");
        assert!(report.tree.is_none());
    }

    #[test]
    fn test_report_body() {
        let report = LongestWord.execute(&parse("Hi there.")).unwrap();
        assert_eq!(
            report.body,
            "Longest word length: 5 characters\n\nSentence: Hi there.\nLongest word: \"there\" (5 characters)\n\n"
        );
    }
}
