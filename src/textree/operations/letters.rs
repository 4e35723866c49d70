//! Vowel and consonant statistics per sentence
//!
//! Letters are matched case-insensitively against fixed Latin and Cyrillic sets.
//! `y` counts as a vowel. Anything else (digits, punctuation, other scripts) is
//! ignored.

use super::registry::{Operation, OperationError, OperationReport};
use crate::textree::ast::{Node, NodeKind};
use std::fmt::Write;
use std::ops::Add;
use tracing::debug;

const VOWELS: &str = "аеёиоуыэюяaeiouy";
const CONSONANTS: &str = "бвгджзйклмнпрстфхцчшщъьbcdfghjklmnpqrstvwxz";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCount {
    pub vowels: usize,
    pub consonants: usize,
}

impl Add for LetterCount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            vowels: self.vowels + other.vowels,
            consonants: self.consonants + other.consonants,
        }
    }
}

pub fn count_letters(text: &str) -> LetterCount {
    text.chars()
        .flat_map(char::to_lowercase)
        .fold(LetterCount::default(), |mut count, c| {
            if VOWELS.contains(c) {
                count.vowels += 1;
            } else if CONSONANTS.contains(c) {
                count.consonants += 1;
            }
            count
        })
}

pub struct VowelsConsonants;

impl Operation for VowelsConsonants {
    fn name(&self) -> &str {
        "vowels-consonants"
    }

    fn description(&self) -> &str {
        "Count vowels and consonants in each sentence"
    }

    fn execute(&self, node: &Node) -> Result<OperationReport, OperationError> {
        let title = "Vowels and consonants per sentence";
        let sentences: Vec<String> = if node.kind() == NodeKind::Sentence {
            vec![node.reconstruct()]
        } else {
            node.descendants_of_kind(NodeKind::Sentence)
                .into_iter()
                .map(|sentence| sentence.reconstruct())
                .collect()
        };
        if sentences.is_empty() {
            return Ok(OperationReport::new(title, "No sentences found.\n"));
        }

        let mut body = String::new();
        let mut total = LetterCount::default();
        for (index, sentence) in sentences.iter().enumerate() {
            let count = count_letters(sentence);
            debug!(
                sentence = index + 1,
                vowels = count.vowels,
                consonants = count.consonants,
                "counted letters"
            );
            let _ = writeln!(
                body,
                "Sentence {}:\n\"{}\"\nVowels: {}, consonants: {}\n",
                index + 1,
                sentence,
                count.vowels,
                count.consonants
            );
            total = total + count;
        }

        let n = sentences.len() as f64;
        let _ = write!(
            body,
            "Sentences: {}\nVowels: {}\nConsonants: {}\nAverage vowels per sentence: {:.2}\nAverage consonants per sentence: {:.2}\n",
            sentences.len(),
            total.vowels,
            total.consonants,
            total.vowels as f64 / n,
            total.consonants as f64 / n
        );
        Ok(OperationReport::new(title, body))
    }
}
