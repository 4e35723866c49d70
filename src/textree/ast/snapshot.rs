//! Tree snapshot - a normalized intermediate representation of the tree
//!
//! The snapshot captures node kinds, a display label and leaf text for every node,
//! so each serializer can focus on presentation without reimplementing traversal.
//! All serializers should consume the output of [snapshot_from_node].

use super::kind::NodeKind;
use super::node::Node;
use serde::Serialize;

/// A snapshot of a node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSnapshot {
    /// The kind of node, serialized lowercase (e.g., "paragraph", "word")
    pub node_type: NodeKind,

    /// Short human-readable label: leaf text, or the reconstruction of a composite
    pub label: String,

    /// Literal text for leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child nodes in the tree
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

/// Create a snapshot of a node and all its descendants
pub fn snapshot_from_node(node: &Node) -> AstSnapshot {
    AstSnapshot {
        node_type: node.kind(),
        label: display_label(node),
        text: node.text().map(str::to_string),
        children: node
            .children()
            .iter()
            .map(|child| snapshot_from_node(child))
            .collect(),
    }
}

fn display_label(node: &Node) -> String {
    match node.kind() {
        NodeKind::Document => {
            let count = node.len();
            format!(
                "{} paragraph{}",
                count,
                if count == 1 { "" } else { "s" }
            )
        }
        _ => node.reconstruct().replace('\n', " "),
    }
}
