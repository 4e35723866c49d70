//! Plain text output: the canonical reconstruction of the tree

use super::registry::{FormatError, Formatter};
use crate::textree::ast::Node;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(node.reconstruct())
    }

    fn description(&self) -> &str {
        "Canonical text rebuilt from the tree"
    }
}
