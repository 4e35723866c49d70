//! Node kinds

use serde::Serialize;
use std::fmt;

/// The level a node occupies in the tree.
///
/// `Word`, `Punctuation` and `Symbol` are leaf kinds; the rest are composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum NodeKind {
    Document,
    Paragraph,
    Sentence,
    Lexeme,
    Word,
    Punctuation,
    Symbol,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Sentence => "Sentence",
            NodeKind::Lexeme => "Lexeme",
            NodeKind::Word => "Word",
            NodeKind::Punctuation => "Punctuation",
            NodeKind::Symbol => "Symbol",
        }
    }

    /// Whether nodes of this kind carry text instead of children
    pub fn is_leaf_kind(self) -> bool {
        matches!(
            self,
            NodeKind::Word | NodeKind::Punctuation | NodeKind::Symbol
        )
    }

    /// Separator written between two adjacent children during reconstruction.
    ///
    /// Documents put each paragraph on its own line. Sentences put a space before
    /// word-like children only; punctuation runs attach to their neighbours.
    pub fn separator_before(self, next: NodeKind) -> Option<&'static str> {
        match self {
            NodeKind::Document => Some("\n"),
            NodeKind::Sentence if matches!(next, NodeKind::Word | NodeKind::Lexeme) => Some(" "),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
