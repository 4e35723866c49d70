//! Treeviz formatter for parsed trees
//!
//! Treeviz is a one line per node view of the tree, which makes it quick to scan
//! how a text was split. Nesting is drawn with `├─`/`└─` connectors and `│`
//! guides, two columns per level.
//!
//! Each line is:
//! <prefix><connector> <icon> <label> (label truncated to the configured width)
//!
//! Example:
//!
//!   ⧉ 1 paragraph
//!   └─ ¶ Hello world!
//!     └─ ↵ Hello world!
//!       ├─ ⊡ Hello
//!       │ └─ ◦ Hello
//!       └─ ⊡ world!
//!         ├─ ◦ world
//!         └─ ∙ !
//!
//! Icons
//!     Document: ⧉
//!     Paragraph: ¶
//!     Sentence: ↵
//!     Lexeme: ⊡
//!     Word: ◦
//!     Punctuation: ∙
//!     Symbol: ※

use super::registry::{FormatError, Formatter};
use crate::textree::ast::{snapshot_from_node, AstSnapshot, Node, NodeKind};

/// Label width used when none is configured
pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node kind
fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Document => "⧉",
        NodeKind::Paragraph => "¶",
        NodeKind::Sentence => "↵",
        NodeKind::Lexeme => "⊡",
        NodeKind::Word => "◦",
        NodeKind::Punctuation => "∙",
        NodeKind::Symbol => "※",
    }
}

/// Build treeviz output from an AstSnapshot
fn format_snapshot(
    output: &mut String,
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    width: usize,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(snapshot.node_type),
        truncate(&snapshot.label, width)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(output, &snapshot.children, &child_prefix, width);
}

fn format_children(output: &mut String, children: &[AstSnapshot], prefix: &str, width: usize) {
    for (i, child) in children.iter().enumerate() {
        format_snapshot(output, child, prefix, i + 1 == children.len(), width);
    }
}

pub fn to_treeviz_str(node: &Node) -> String {
    to_treeviz_str_with_width(node, DEFAULT_LABEL_WIDTH)
}

/// Render `node` with labels cut after `width` characters
pub fn to_treeviz_str_with_width(node: &Node, width: usize) -> String {
    let snapshot = snapshot_from_node(node);
    let mut output = format!(
        "{} {}\n",
        get_icon(snapshot.node_type),
        truncate(&snapshot.label, width)
    );
    format_children(&mut output, &snapshot.children, "", width);
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter {
    label_width: usize,
}

impl TreevizFormatter {
    pub fn new(label_width: usize) -> Self {
        Self { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_width(node, self.label_width))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textree::parse;

    #[test]
    fn test_treeviz_small_document() {
        let output = to_treeviz_str(&parse("Hello world!"));
        insta::assert_snapshot!(output, @r###"
        ⧉ 1 paragraph
        └─ ¶ Hello world!
          └─ ↵ Hello world!
            ├─ ⊡ Hello
            │ └─ ◦ Hello
            └─ ⊡ world!
              ├─ ◦ world
              └─ ∙ !
        "###);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_treeviz_str(&parse("")), "⧉ 0 paragraphs\n");
    }

    #[test]
    fn test_labels_are_truncated() {
        let doc = parse("Supercalifragilistic expialidocious.");
        let output = TreevizFormatter::new(10).serialize(&doc).unwrap();
        let paragraph_line = output.lines().nth(1).unwrap();
        assert_eq!(paragraph_line, "└─ ¶ Supercalif...");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("привет", 3), "при...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
