//! The tree node
//!
//! Structure:
//!
//! | State     | Payload              | add / remove / child(i)     |
//! |-----------|----------------------|-----------------------------|
//! | Leaf      | literal text         | StructuralError             |
//! | Composite | ordered `Arc<Node>`s | append / by identity / get  |
//!
//! Reconstruction concatenates children in order and asks the parent kind for the
//! separator between neighbours, see [NodeKind::separator_before].

use super::error::StructuralError;
use super::kind::NodeKind;
use super::visitor::Visitor;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
enum Body {
    Leaf(String),
    Composite(Vec<Arc<Node>>),
}

/// A node of the text tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    body: Body,
}

impl Node {
    /// A composite node with no children yet
    ///
    /// # Panics
    ///
    /// If `kind` is a leaf kind (see [NodeKind::is_leaf_kind]).
    pub fn composite(kind: NodeKind) -> Self {
        assert!(
            !kind.is_leaf_kind(),
            "{} is a leaf kind and cannot be a composite",
            kind
        );
        Self {
            kind,
            body: Body::Composite(Vec::new()),
        }
    }

    /// A composite node holding the given children, in order
    ///
    /// # Panics
    ///
    /// If `kind` is a leaf kind.
    pub fn with_children(kind: NodeKind, children: Vec<Arc<Node>>) -> Self {
        let mut node = Self::composite(kind);
        node.body = Body::Composite(children);
        node
    }

    /// A leaf node carrying literal text
    ///
    /// # Panics
    ///
    /// If `kind` is a composite kind.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        assert!(
            kind.is_leaf_kind(),
            "{} is a composite kind and cannot be a leaf",
            kind
        );
        Self {
            kind,
            body: Body::Leaf(text.into()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.body, Body::Leaf(_))
    }

    /// The literal text of a leaf; `None` for composites
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            Body::Leaf(text) => Some(text),
            Body::Composite(_) => None,
        }
    }

    /// Read-only view of the children. Leaves have none.
    pub fn children(&self) -> &[Arc<Node>] {
        match &self.body {
            Body::Leaf(_) => &[],
            Body::Composite(children) => children,
        }
    }

    pub fn len(&self) -> usize {
        self.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    /// The child at `index`
    pub fn child(&self, index: usize) -> Result<&Arc<Node>, StructuralError> {
        let children = self.composite_children("index")?;
        children
            .get(index)
            .ok_or(StructuralError::IndexOutOfBounds {
                kind: self.kind,
                index,
                len: children.len(),
            })
    }

    /// Append a child
    pub fn add(&mut self, child: impl Into<Arc<Node>>) -> Result<(), StructuralError> {
        let kind = self.kind;
        match &mut self.body {
            Body::Leaf(_) => Err(StructuralError::LeafHasNoChildren {
                kind,
                operation: "add",
            }),
            Body::Composite(children) => {
                children.push(child.into());
                Ok(())
            }
        }
    }

    /// Remove the first child that is the very same node as `child`.
    ///
    /// Returns the removed child, or `None` if no child is identical.
    pub fn remove(&mut self, child: &Arc<Node>) -> Result<Option<Arc<Node>>, StructuralError> {
        let kind = self.kind;
        match &mut self.body {
            Body::Leaf(_) => Err(StructuralError::LeafHasNoChildren {
                kind,
                operation: "remove",
            }),
            Body::Composite(children) => Ok(children
                .iter()
                .position(|candidate| Arc::ptr_eq(candidate, child))
                .map(|index| children.remove(index))),
        }
    }

    /// Serialize the subtree back into text
    pub fn reconstruct(&self) -> String {
        let mut out = String::new();
        self.reconstruct_into(&mut out);
        out
    }

    fn reconstruct_into(&self, out: &mut String) {
        match &self.body {
            Body::Leaf(text) => out.push_str(text),
            Body::Composite(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        if let Some(separator) = self.kind.separator_before(child.kind) {
                            out.push_str(separator);
                        }
                    }
                    child.reconstruct_into(out);
                }
            }
        }
    }

    /// All descendants of the given kind, in document order
    pub fn descendants_of_kind(&self, kind: NodeKind) -> Vec<&Arc<Node>> {
        let mut found = Vec::new();
        collect_of_kind(self.children(), kind, &mut found);
        found
    }

    /// Walk the subtree depth-first with a visitor
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self.kind {
            NodeKind::Document => visitor.visit_document(self),
            NodeKind::Paragraph => visitor.visit_paragraph(self),
            NodeKind::Sentence => visitor.visit_sentence(self),
            NodeKind::Lexeme => visitor.visit_lexeme(self),
            NodeKind::Word => visitor.visit_word(self),
            NodeKind::Punctuation => visitor.visit_punctuation(self),
            NodeKind::Symbol => visitor.visit_symbol(self),
        }
        super::visitor::visit_children(visitor, self.children());
        match self.kind {
            NodeKind::Document => visitor.leave_document(self),
            NodeKind::Paragraph => visitor.leave_paragraph(self),
            NodeKind::Sentence => visitor.leave_sentence(self),
            NodeKind::Lexeme => visitor.leave_lexeme(self),
            _ => {}
        }
    }

    fn composite_children(&self, operation: &'static str) -> Result<&[Arc<Node>], StructuralError> {
        match &self.body {
            Body::Leaf(_) => Err(StructuralError::LeafHasNoChildren {
                kind: self.kind,
                operation,
            }),
            Body::Composite(children) => Ok(children),
        }
    }
}

fn collect_of_kind<'a>(children: &'a [Arc<Node>], kind: NodeKind, found: &mut Vec<&'a Arc<Node>>) {
    for child in children {
        if child.kind == kind {
            found.push(child);
        }
        collect_of_kind(child.children(), kind, found);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reconstruct())
    }
}
