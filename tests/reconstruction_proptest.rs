//! Property-based tests for parsing and reconstruction
//!
//! Most generated texts avoid digits so the arithmetic pass leaves them alone;
//! what is left to check is that splitting keeps every character that is not
//! separator whitespace, in order.

use proptest::prelude::*;
use textree::textree::ast::NodeKind;
use textree::textree::parse;

fn without_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A lowercase word, Latin or Cyrillic
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-z]{1,8}", "[а-я]{1,8}"]
}

/// A capitalized sentence ending with a terminator
fn sentence_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Z]",
        prop::collection::vec(word_strategy(), 0..6),
        prop_oneof![Just("."), Just("!"), Just("?"), Just("…")],
    )
        .prop_map(|(initial, words, terminator)| {
            let mut sentence = format!("{}x", initial);
            for word in words {
                sentence.push(' ');
                sentence.push_str(&word);
            }
            sentence.push_str(terminator);
            sentence
        })
}

fn paragraph_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence_strategy(), 1..5)
}

proptest! {
    #[test]
    fn parse_never_panics(text in "\\PC{0,200}") {
        let doc = parse(&text);
        prop_assert_eq!(doc.kind(), NodeKind::Document);
    }

    #[test]
    fn reconstruction_keeps_non_whitespace(text in "[a-zA-Zа-яА-Я .,!?;:'\\n\\t-]{0,200}") {
        let doc = parse(&text);
        prop_assert_eq!(without_whitespace(&doc.reconstruct()), without_whitespace(&text));
    }

    #[test]
    fn reconstruction_is_repeatable(text in "\\PC{0,200}") {
        let doc = parse(&text);
        prop_assert_eq!(doc.reconstruct(), doc.reconstruct());
    }

    #[test]
    fn single_line_reparse_is_stable(text in "[a-zA-Z0-9 .,!?+*/-]{0,120}") {
        // Bare expressions only: the bare pass runs to a fixpoint on its own
        let reconstructed = parse(&text).reconstruct();
        prop_assert_eq!(parse(&reconstructed).reconstruct(), reconstructed);
    }

    #[test]
    fn generated_structure_is_recovered(
        paragraphs in prop::collection::vec(paragraph_strategy(), 1..4)
    ) {
        let text = paragraphs
            .iter()
            .map(|sentences| sentences.join(" "))
            .collect::<Vec<_>>()
            .join("\n\n");
        let doc = parse(&text);

        prop_assert_eq!(doc.len(), paragraphs.len());
        for (paragraph, sentences) in doc.children().iter().zip(&paragraphs) {
            prop_assert_eq!(paragraph.len(), sentences.len());
            prop_assert_eq!(paragraph.reconstruct(), sentences.concat());
        }
    }
}
