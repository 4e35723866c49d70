//! Analytic operations over a parsed tree
//!
//! Operations read a tree through the public node API and never modify it. Those
//! that produce a rearranged text return a new tree that shares the untouched
//! subtrees with the input.
//!
//! | # | Name                     | Result                                                    |
//! |---|--------------------------|-----------------------------------------------------------|
//! | 1 | `sort-paragraphs`        | paragraphs ordered by sentence count, ascending (stable)  |
//! | 2 | `longest-word`           | sentences that contain the longest word of the text       |
//! | 3 | `remove-short-sentences` | text without sentences below a minimum word count         |
//! | 4 | `identical-words`        | case-insensitive counts of words that occur more than once |
//! | 5 | `vowels-consonants`      | vowel and consonant counts per sentence                   |

pub mod identical_words;
pub mod letters;
pub mod longest_word;
pub mod registry;
pub mod short_sentences;
pub mod sort_paragraphs;

pub use identical_words::{repeated_words, IdenticalWords};
pub use letters::{count_letters, LetterCount, VowelsConsonants};
pub use longest_word::{sentences_with_longest_word, LongestWord, LongestWordMatch};
pub use registry::{Operation, OperationError, OperationRegistry, OperationReport};
pub use short_sentences::{word_count, RemoveShortSentences};
pub use sort_paragraphs::SortParagraphs;
