//! The stage parser interface

use crate::textree::ast::{Node, NodeKind};
use std::sync::Arc;

/// One step of the parsing chain.
///
/// `next` holds the stages after this one, in order. A stage delegates each
/// sub-fragment to `next[0]` with `&next[1..]`; an empty `next` means this stage is
/// terminal.
pub trait StageParser: Send + Sync {
    /// Kind of the composite this stage produces
    fn kind(&self) -> NodeKind;

    /// Parse `fragment` into a node of [kind](StageParser::kind)
    fn parse(&self, fragment: &str, next: &[Box<dyn StageParser>]) -> Node;
}

/// Build a composite of `kind` from sub-fragments.
///
/// Each piece is trimmed and skipped when empty; the rest are parsed by the next
/// stage. Without a next stage the composite is returned with no children.
pub fn compose<'a>(
    kind: NodeKind,
    pieces: impl IntoIterator<Item = &'a str>,
    next: &[Box<dyn StageParser>],
) -> Node {
    let Some((stage, rest)) = next.split_first() else {
        return Node::composite(kind);
    };
    let children = pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| Arc::new(stage.parse(piece, rest)))
        .collect();
    Node::with_children(kind, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl StageParser for Echo {
        fn kind(&self) -> NodeKind {
            NodeKind::Lexeme
        }

        fn parse(&self, fragment: &str, _next: &[Box<dyn StageParser>]) -> Node {
            Node::with_children(
                NodeKind::Lexeme,
                vec![Arc::new(Node::leaf(NodeKind::Word, fragment))],
            )
        }
    }

    #[test]
    fn test_compose_trims_and_skips_empty() {
        let next: Vec<Box<dyn StageParser>> = vec![Box::new(Echo)];
        let node = compose(NodeKind::Sentence, vec!["  a ", "", "   ", "b"], &next);
        assert_eq!(node.len(), 2);
        assert_eq!(node.reconstruct(), "a b");
    }

    #[test]
    fn test_compose_terminal_has_no_children() {
        let node = compose(NodeKind::Sentence, vec!["a", "b"], &[]);
        assert_eq!(node.kind(), NodeKind::Sentence);
        assert!(node.is_empty());
    }
}
