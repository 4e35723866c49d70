//! The ordered chain of stages

use super::{DocumentStage, LexemeStage, ParagraphStage, SentenceStage, StageParser};
use crate::textree::ast::{Node, NodeKind};
use crate::textree::config::ParsingConfig;
use tracing::debug;

/// An ordered list of stage parsers.
///
/// The first stage receives the whole text; every stage hands its sub-fragments to
/// the stages after it. The chain is immutable once built and can be shared across
/// threads.
pub struct ParserChain {
    stages: Vec<Box<dyn StageParser>>,
}

impl ParserChain {
    pub fn new(stages: Vec<Box<dyn StageParser>>) -> Self {
        Self { stages }
    }

    /// Document → Paragraph → Sentence → Lexeme, with arithmetic evaluation
    pub fn standard() -> Self {
        Self::from_config(&ParsingConfig::default())
    }

    pub fn from_config(config: &ParsingConfig) -> Self {
        let paragraph = if config.evaluate_arithmetic {
            ParagraphStage::new()
        } else {
            ParagraphStage::without_arithmetic()
        };
        Self::new(vec![
            Box::new(DocumentStage),
            Box::new(paragraph),
            Box::new(SentenceStage),
            Box::new(LexemeStage),
        ])
    }

    /// Kinds produced by each stage, in order
    pub fn stage_kinds(&self) -> Vec<NodeKind> {
        self.stages.iter().map(|stage| stage.kind()).collect()
    }

    /// Parse `text` into a tree rooted at the first stage's kind.
    ///
    /// An empty chain yields an empty Document.
    pub fn parse(&self, text: &str) -> Node {
        let Some((first, rest)) = self.stages.split_first() else {
            return Node::composite(NodeKind::Document);
        };
        let root = first.parse(text, rest);
        debug!(
            bytes = text.len(),
            root = %root.kind(),
            children = root.len(),
            "parsed text"
        );
        root
    }
}

impl Default for ParserChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ParserChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserChain")
            .field("stages", &self.stage_kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chain_order() {
        assert_eq!(
            ParserChain::standard().stage_kinds(),
            vec![
                NodeKind::Document,
                NodeKind::Paragraph,
                NodeKind::Sentence,
                NodeKind::Lexeme
            ]
        );
    }

    #[test]
    fn test_empty_chain() {
        let doc = ParserChain::new(Vec::new()).parse("Anything at all.");
        assert_eq!(doc.kind(), NodeKind::Document);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_truncated_chain_stops_at_paragraphs() {
        let chain = ParserChain::new(vec![
            Box::new(DocumentStage),
            Box::new(ParagraphStage::new()),
        ]);
        let doc = chain.parse("One. Two.\n\nThree.");
        assert_eq!(doc.len(), 2);
        assert!(doc
            .children()
            .iter()
            .all(|paragraph| paragraph.kind() == NodeKind::Paragraph && paragraph.is_empty()));
    }

    #[test]
    fn test_from_config_without_arithmetic() {
        let config = ParsingConfig {
            evaluate_arithmetic: false,
        };
        let doc = ParserChain::from_config(&config).parse("Sum (1+1) here.");
        assert_eq!(doc.reconstruct(), "Sum (1+1) here.");
    }

    #[test]
    fn test_full_tree_shape() {
        let doc = ParserChain::standard().parse("Hello world! How are you?\n\nFine.");
        assert_eq!(doc.len(), 2);
        let first = doc.child(0).unwrap();
        assert_eq!(first.len(), 2);
        let hello = first.child(0).unwrap();
        assert_eq!(hello.len(), 2);
        let world = hello.child(1).unwrap();
        assert_eq!(world.kind(), NodeKind::Lexeme);
        assert_eq!(world.child(0).unwrap().text(), Some("world"));
        assert_eq!(world.child(1).unwrap().kind(), NodeKind::Punctuation);
    }

    #[test]
    fn test_chain_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParserChain>();
    }
}
