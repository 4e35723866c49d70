//! # textree
//!
//! Turns raw natural-language text into a structural tree
//! (document → paragraph → sentence → lexeme → word/punctuation) and reconstructs
//! canonical text from that tree.
//!
//! File Layout
//!
//! src/textree
//!   ├── ast          Node model, visitor, snapshots
//!   ├── arithmetic   Expression tokens, evaluator and the text rewrite pass
//!   ├── parsing      Regex patterns, the four stage parsers and the chain
//!   ├── formats      Output serializers (text, treeviz, json, yaml)
//!   ├── operations   Read-only analytic passes over a parsed tree
//!   └── testing      Fluent assertions for trees
//!
//! For testing guidelines, see the [testing module](textree::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod textree;
