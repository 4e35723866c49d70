//! Count words that occur more than once, ignoring case

use super::registry::{Operation, OperationError, OperationReport};
use crate::textree::ast::{KindCollector, Node, NodeKind};
use std::collections::HashMap;
use std::fmt::Write;
use tracing::debug;

/// Lowercased word counts, in document order of first occurrence
fn word_counts(node: &Node) -> Vec<(String, usize)> {
    let mut collector = KindCollector::new(NodeKind::Word);
    node.accept(&mut collector);

    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for word in collector.texts {
        let word = word.to_lowercase();
        match index.get(&word) {
            Some(&position) => order[position].1 += 1,
            None => {
                index.insert(word.clone(), order.len());
                order.push((word, 1));
            }
        }
    }
    order
}

/// Words occurring more than once, most frequent first, ties alphabetical
pub fn repeated_words(node: &Node) -> Vec<(String, usize)> {
    let mut repeated: Vec<_> = word_counts(node)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    repeated.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));
    repeated
}

pub struct IdenticalWords;

impl Operation for IdenticalWords {
    fn name(&self) -> &str {
        "identical-words"
    }

    fn description(&self) -> &str {
        "Count words that appear more than once, ignoring case"
    }

    fn execute(&self, node: &Node) -> Result<OperationReport, OperationError> {
        let title = "Identical words (case-insensitive)";
        let counts = word_counts(node);
        if counts.is_empty() {
            return Ok(OperationReport::new(title, "No words found.\n"));
        }

        let repeated = repeated_words(node);
        let mut body = String::new();
        if repeated.is_empty() {
            body.push_str("No repeated words found.\n");
        } else {
            body.push_str("Repeated words:\n");
            for (word, count) in &repeated {
                debug!(word = %word, count, "repeated word");
                let _ = writeln!(body, "- \"{word}\": {count} times");
            }
        }
        let _ = write!(
            body,
            "\nUnique words: {}\nRepeated words: {}\n",
            counts.len(),
            repeated.len()
        );
        Ok(OperationReport::new(title, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textree::parse;

    #[test]
    fn test_case_insensitive_counts() {
        let doc = parse("The cat and the dog. The END and the end.");
        assert_eq!(
            repeated_words(&doc),
            vec![
                ("the".to_string(), 4),
                ("and".to_string(), 2),
                ("end".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_cyrillic_lowercase() {
        let doc = parse("Мир и МИР. Мир!");
        assert_eq!(repeated_words(&doc), vec![("мир".to_string(), 3)]);
    }

    #[test]
    fn test_no_repeats() {
        let report = IdenticalWords.execute(&parse("All words differ.")).unwrap();
        assert_eq!(
            report.body,
            "No repeated words found.\n\nUnique words: 3\nRepeated words: 0\n"
        );
    }

    #[test]
    fn test_report_body() {
        let report = IdenticalWords.execute(&parse("Go go GO now.")).unwrap();
        assert_eq!(
            report.body,
            "Repeated words:\n- \"go\": 3 times\n\nUnique words: 2\nRepeated words: 1\n"
        );
    }

    #[test]
    fn test_empty_text() {
        let report = IdenticalWords.execute(&parse("   ")).unwrap();
        assert_eq!(report.body, "No words found.\n");
    }
}
