//! Visitor trait for traversing the tree
//!
//! Implement this trait to walk a parsed tree. Each visit method corresponds to a
//! node kind. Default implementations are empty, so you only need to override the
//! methods you care about.
//!
//! # Example
//!
//! ```ignore
//! struct WordCounter(usize);
//!
//! impl Visitor for WordCounter {
//!     fn visit_word(&mut self, _word: &Node) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut counter = WordCounter(0);
//! document.accept(&mut counter);
//! ```

use super::kind::NodeKind;
use super::node::Node;
use std::sync::Arc;

pub trait Visitor {
    // Composite levels
    fn visit_document(&mut self, _document: &Node) {}
    fn leave_document(&mut self, _document: &Node) {}

    fn visit_paragraph(&mut self, _paragraph: &Node) {}
    fn leave_paragraph(&mut self, _paragraph: &Node) {}

    fn visit_sentence(&mut self, _sentence: &Node) {}
    fn leave_sentence(&mut self, _sentence: &Node) {}

    fn visit_lexeme(&mut self, _lexeme: &Node) {}
    fn leave_lexeme(&mut self, _lexeme: &Node) {}

    // Leaves
    fn visit_word(&mut self, _word: &Node) {}
    fn visit_punctuation(&mut self, _punctuation: &Node) {}
    fn visit_symbol(&mut self, _symbol: &Node) {}
}

/// Helper function to visit all children in a node slice
pub fn visit_children(visitor: &mut dyn Visitor, children: &[Arc<Node>]) {
    for child in children {
        child.accept(visitor);
    }
}

/// Collects the text of every leaf of one kind, in document order
#[derive(Debug)]
pub struct KindCollector {
    kind: NodeKind,
    pub texts: Vec<String>,
}

impl KindCollector {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            texts: Vec::new(),
        }
    }

    fn collect(&mut self, node: &Node) {
        if node.kind() == self.kind {
            if let Some(text) = node.text() {
                self.texts.push(text.to_string());
            }
        }
    }
}

impl Visitor for KindCollector {
    fn visit_word(&mut self, word: &Node) {
        self.collect(word);
    }

    fn visit_punctuation(&mut self, punctuation: &Node) {
        self.collect(punctuation);
    }

    fn visit_symbol(&mut self, symbol: &Node) {
        self.collect(symbol);
    }
}
