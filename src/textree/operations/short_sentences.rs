//! Drop sentences that have too few words

use super::registry::{Operation, OperationError, OperationReport};
use crate::textree::ast::{Node, NodeKind};
use crate::textree::config::DEFAULT_MIN_WORD_COUNT;
use std::sync::Arc;
use tracing::{debug, warn};

/// Number of Word leaves in a sentence
pub fn word_count(sentence: &Node) -> usize {
    sentence.descendants_of_kind(NodeKind::Word).len()
}

pub struct RemoveShortSentences {
    min_word_count: usize,
    description: String,
}

impl RemoveShortSentences {
    /// A zero minimum falls back to the default
    pub fn new(min_word_count: usize) -> Self {
        let min_word_count = if min_word_count == 0 {
            warn!(
                fallback = DEFAULT_MIN_WORD_COUNT,
                "minimum word count must be positive, using the default"
            );
            DEFAULT_MIN_WORD_COUNT
        } else {
            min_word_count
        };
        Self {
            min_word_count,
            description: format!("Remove sentences with fewer than {min_word_count} words"),
        }
    }

    pub fn min_word_count(&self) -> usize {
        self.min_word_count
    }

    /// New paragraph holding only the sentences that are long enough
    fn filter_paragraph(&self, paragraph: &Node) -> Node {
        let kept = paragraph
            .children()
            .iter()
            .filter(|sentence| {
                let words = word_count(sentence);
                let keep = words >= self.min_word_count;
                debug!(
                    words,
                    keep,
                    sentence = %sentence.reconstruct(),
                    "checked sentence length"
                );
                keep
            })
            .cloned()
            .collect();
        Node::with_children(NodeKind::Paragraph, kept)
    }

    fn filter_document(&self, document: &Node) -> Node {
        let paragraphs = document
            .children()
            .iter()
            .map(|paragraph| self.filter_paragraph(paragraph))
            .filter(|paragraph| !paragraph.is_empty())
            .map(Arc::new)
            .collect();
        Node::with_children(NodeKind::Document, paragraphs)
    }
}

impl Default for RemoveShortSentences {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORD_COUNT)
    }
}

impl Operation for RemoveShortSentences {
    fn name(&self) -> &str {
        "remove-short-sentences"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&self, node: &Node) -> Result<OperationReport, OperationError> {
        let filtered = match node.kind() {
            NodeKind::Document => self.filter_document(node),
            NodeKind::Paragraph => self.filter_paragraph(node),
            kind => {
                return Err(OperationError::Unsupported {
                    operation: "remove-short-sentences",
                    kind,
                })
            }
        };
        let title = format!(
            "Removed sentences with fewer than {} words",
            self.min_word_count
        );
        let body = format!("Resulting text:\n{}\n", filtered.reconstruct());
        Ok(OperationReport::new(title, body).with_tree(filtered))
    }
}
