//! Paragraph stage: arithmetic rewrite, then paragraph → sentences

use super::patterns::SENTENCE_BOUNDARY;
use super::stage::{compose, StageParser};
use crate::textree::arithmetic::ArithmeticRewriter;
use crate::textree::ast::{Node, NodeKind};
use tracing::debug;

/// Splits a paragraph into sentences.
///
/// When arithmetic is enabled, expressions in the paragraph are replaced with their
/// values first, so a boundary can never fall inside an expression.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphStage {
    rewriter: Option<ArithmeticRewriter>,
}

impl ParagraphStage {
    pub fn new() -> Self {
        Self {
            rewriter: Some(ArithmeticRewriter::new()),
        }
    }

    /// A paragraph stage that leaves expressions as written
    pub fn without_arithmetic() -> Self {
        Self { rewriter: None }
    }

    pub fn evaluates_arithmetic(&self) -> bool {
        self.rewriter.is_some()
    }
}

impl Default for ParagraphStage {
    fn default() -> Self {
        Self::new()
    }
}

impl StageParser for ParagraphStage {
    fn kind(&self) -> NodeKind {
        NodeKind::Paragraph
    }

    fn parse(&self, fragment: &str, next: &[Box<dyn StageParser>]) -> Node {
        let text = match &self.rewriter {
            Some(rewriter) => {
                let rewrite = rewriter.rewrite(fragment);
                if !rewrite.replaced.is_empty() {
                    debug!(
                        replaced = rewrite.replaced.len(),
                        skipped = rewrite.skipped.len(),
                        "rewrote arithmetic in paragraph"
                    );
                }
                rewrite.text
            }
            None => fragment.to_string(),
        };

        compose(
            NodeKind::Paragraph,
            split_sentences(&text),
            next,
        )
    }
}

/// Split text at sentence boundaries, keeping each terminator with its sentence
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for caps in SENTENCE_BOUNDARY.captures_iter(text) {
        if let Some(gap) = caps.get(1) {
            sentences.push(&text[start..gap.start()]);
            start = gap.end();
        }
    }
    sentences.push(&text[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textree::parsing::{LexemeStage, SentenceStage};

    fn tail() -> Vec<Box<dyn StageParser>> {
        vec![Box::new(SentenceStage), Box::new(LexemeStage)]
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("Hello world! How are you? I'm fine."),
            vec!["Hello world!", "How are you?", "I'm fine."]
        );
        assert_eq!(split_sentences("A. B. C."), vec!["A.", "B.", "C."]);
        assert_eq!(split_sentences("Привет. Как дела?"), vec!["Привет.", "Как дела?"]);
        assert_eq!(split_sentences("Wait… Then"), vec!["Wait…", "Then"]);
    }

    #[test]
    fn test_no_split_before_lowercase() {
        assert_eq!(split_sentences("See e.g. this one."), vec!["See e.g. this one."]);
    }

    #[test]
    fn test_parse_counts_sentences() {
        let paragraph = ParagraphStage::new().parse("One. Two! Three?", &tail());
        assert_eq!(paragraph.kind(), NodeKind::Paragraph);
        assert_eq!(paragraph.len(), 3);
        assert_eq!(paragraph.child(1).unwrap().reconstruct(), "Two!");
    }

    #[test]
    fn test_arithmetic_runs_before_splitting() {
        let paragraph = ParagraphStage::new().parse("It costs (2+3) now. Done.", &tail());
        assert_eq!(paragraph.len(), 2);
        assert_eq!(paragraph.child(0).unwrap().reconstruct(), "It costs 5.0 now.");
    }

    #[test]
    fn test_arithmetic_can_be_disabled() {
        let stage = ParagraphStage::without_arithmetic();
        assert!(!stage.evaluates_arithmetic());
        let paragraph = stage.parse("It costs (2+3) now.", &tail());
        assert_eq!(paragraph.reconstruct(), "It costs (2+3) now.");
    }

    #[test]
    fn test_division_by_zero_does_not_abort() {
        let paragraph = ParagraphStage::new().parse("Try 5/0 today. Then 1+1.", &tail());
        assert_eq!(paragraph.len(), 2);
        assert_eq!(paragraph.reconstruct(), "Try 5/0 today.Then 2.0.");
    }
}
