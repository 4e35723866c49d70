//! Tree model for parsed text
//!
//! A single [Node] type covers every level of the tree. Whether a node is a leaf
//! (carries text, no children) or a composite (ordered children, no text) is fixed
//! when the node is built; structural operations on a leaf fail with a
//! [StructuralError] instead of silently doing nothing.
//!
//! Children are held as `Arc<Node>` so filtered or reordered trees can reuse nodes of
//! an existing tree by reference. Nodes are not mutated once their stage parser has
//! returned them, which is what makes that sharing sound.
//!
//! Consumers walk the tree through [Node::kind], [Node::children],
//! [Node::reconstruct] or a [Visitor]. [NodeKind] is `#[non_exhaustive]`, so outside
//! code must handle kinds it does not know about.

pub mod error;
pub mod kind;
pub mod node;
pub mod snapshot;
pub mod visitor;

pub use error::StructuralError;
pub use kind::NodeKind;
pub use node::Node;
pub use snapshot::{snapshot_from_node, AstSnapshot};
pub use visitor::{visit_children, KindCollector, Visitor};
