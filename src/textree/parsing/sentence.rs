//! Sentence stage: sentence → lexemes

use super::patterns::LEXEME;
use super::stage::{compose, StageParser};
use crate::textree::ast::{Node, NodeKind};

/// Splits a sentence into whitespace-delimited lexemes
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceStage;

impl StageParser for SentenceStage {
    fn kind(&self) -> NodeKind {
        NodeKind::Sentence
    }

    fn parse(&self, fragment: &str, next: &[Box<dyn StageParser>]) -> Node {
        compose(
            NodeKind::Sentence,
            LEXEME.find_iter(fragment).map(|m| m.as_str()),
            next,
        )
    }
}
