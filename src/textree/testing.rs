//! Testing utilities for tree assertions
//!
//! [assert_tree](fn@assert_tree) gives a fluent way to check the shape of a parsed
//! tree without long chains of `child(i).unwrap()`:
//!
//! ```rust-example
//! use crate::textree::testing::assert_tree;
//!
//! let doc = parse("Hello world!");
//! assert_tree(&doc)
//!     .kind(NodeKind::Document)
//!     .child_count(1)
//!     .child(0, |paragraph| {
//!         paragraph.child(0, |sentence| {
//!             sentence.words(&["Hello", "world"]).reconstructs_to("Hello world!");
//!         });
//!     });
//! ```
//!
//! Failures name the path to the offending node (`children[0].children[1]`), so
//! nested assertions stay readable.

mod tree_assertions;

pub use tree_assertions::{assert_tree, TreeAssertion};
