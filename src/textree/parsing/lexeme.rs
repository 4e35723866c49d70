//! Lexeme stage: lexeme → word and punctuation leaves
//!
//! This is the last stage. It always produces leaves and ignores any stages after it.

use super::patterns::WORD;
use super::stage::StageParser;
use crate::textree::ast::{Node, NodeKind};
use std::sync::Arc;

/// Splits a lexeme into words and the punctuation between them
#[derive(Debug, Clone, Copy, Default)]
pub struct LexemeStage;

impl StageParser for LexemeStage {
    fn kind(&self) -> NodeKind {
        NodeKind::Lexeme
    }

    fn parse(&self, fragment: &str, _next: &[Box<dyn StageParser>]) -> Node {
        let mut children = Vec::new();
        let mut last = 0;

        for word in WORD.find_iter(fragment) {
            push_punctuation(&fragment[last..word.start()], &mut children);
            children.push(Arc::new(Node::leaf(NodeKind::Word, word.as_str())));
            last = word.end();
        }
        push_punctuation(&fragment[last..], &mut children);

        Node::with_children(NodeKind::Lexeme, children)
    }
}

/// Gaps between words are kept verbatim unless they are pure whitespace
fn push_punctuation(gap: &str, children: &mut Vec<Arc<Node>>) {
    if !gap.trim().is_empty() {
        children.push(Arc::new(Node::leaf(NodeKind::Punctuation, gap)));
    }
}
