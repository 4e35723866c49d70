//! Fluent assertion API for tree nodes

use crate::textree::ast::{Node, NodeKind};

/// Create an assertion builder for a node
pub fn assert_tree(node: &Node) -> TreeAssertion<'_> {
    TreeAssertion {
        node,
        context: "root".to_string(),
    }
}

pub struct TreeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> TreeAssertion<'a> {
    /// Assert the node kind
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: expected {} node, found {}",
            self.context,
            expected,
            self.node.kind()
        );
        self
    }

    /// Assert the number of children
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_children(self.node)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TreeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} has {} children)",
            self.context,
            index,
            self.node.kind(),
            children.len()
        );
        assertion(TreeAssertion {
            node: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Assert the literal text of a leaf
    pub fn text(self, expected: &str) -> Self {
        match self.node.text() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: expected leaf text {:?}, found {:?}",
                self.context, expected, actual
            ),
            None => panic!(
                "{}: expected a leaf with text {:?}, found {} composite",
                self.context,
                expected,
                self.node.kind()
            ),
        }
        self
    }

    /// Assert the node's reconstruction
    pub fn reconstructs_to(self, expected: &str) -> Self {
        let actual = self.node.reconstruct();
        assert_eq!(
            actual, expected,
            "{}: expected reconstruction {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the Word leaves below this node, in order
    pub fn words(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .descendants_of_kind(NodeKind::Word)
            .into_iter()
            .filter_map(|word| word.text())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: word mismatch",
            self.context
        );
        self
    }
}

fn summarize_children(node: &Node) -> String {
    node.children()
        .iter()
        .map(|child| match child.text() {
            Some(text) => format!("{}({:?})", child.kind(), text),
            None => format!("{}[{}]", child.kind(), child.len()),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
