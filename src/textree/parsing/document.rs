//! Document stage: raw text → paragraphs

use super::patterns::PARAGRAPH_SEPARATOR;
use super::stage::{compose, StageParser};
use crate::textree::ast::{Node, NodeKind};

/// Splits text into paragraphs on blank lines and indented lines
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentStage;

impl StageParser for DocumentStage {
    fn kind(&self) -> NodeKind {
        NodeKind::Document
    }

    fn parse(&self, fragment: &str, next: &[Box<dyn StageParser>]) -> Node {
        compose(
            NodeKind::Document,
            PARAGRAPH_SEPARATOR.split(fragment),
            next,
        )
    }
}
