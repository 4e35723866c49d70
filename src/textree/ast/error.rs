//! Error types for tree mutation and access

use super::kind::NodeKind;
use thiserror::Error;

/// Violations of the leaf/composite contract.
///
/// These are programmer errors: callers are expected to surface them, not to
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// add/remove/index attempted on a leaf node
    #[error("cannot {operation} children of {kind} leaf")]
    LeafHasNoChildren {
        kind: NodeKind,
        operation: &'static str,
    },
    /// Indexed access past the end of a composite's children
    #[error("child index {index} out of bounds ({kind} has {len} children)")]
    IndexOutOfBounds {
        kind: NodeKind,
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = StructuralError::LeafHasNoChildren {
            kind: NodeKind::Word,
            operation: "add",
        };
        assert_eq!(err.to_string(), "cannot add children of Word leaf");

        let err = StructuralError::IndexOutOfBounds {
            kind: NodeKind::Sentence,
            index: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "child index 4 out of bounds (Sentence has 2 children)"
        );
    }
}
