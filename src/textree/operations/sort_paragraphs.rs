//! Reorder paragraphs by how many sentences they hold

use super::registry::{Operation, OperationError, OperationReport};
use crate::textree::ast::{Node, NodeKind};
use std::fmt::Write;
use tracing::debug;

pub struct SortParagraphs;

impl Operation for SortParagraphs {
    fn name(&self) -> &str {
        "sort-paragraphs"
    }

    fn description(&self) -> &str {
        "Sort paragraphs by sentence count, ascending"
    }

    fn execute(&self, node: &Node) -> Result<OperationReport, OperationError> {
        if node.kind() != NodeKind::Document {
            return Err(OperationError::Unsupported {
                operation: "sort-paragraphs",
                kind: node.kind(),
            });
        }

        // Stable, so paragraphs with equal counts keep their order
        let mut paragraphs: Vec<_> = node.children().iter().enumerate().collect();
        paragraphs.sort_by_key(|(_, paragraph)| paragraph.len());

        let mut body = String::new();
        for (index, paragraph) in &paragraphs {
            debug!(paragraph = index + 1, sentences = paragraph.len(), "sorted paragraph");
            let _ = writeln!(
                body,
                "Paragraph {} ({} sentence{}):\n{}\n",
                index + 1,
                paragraph.len(),
                if paragraph.len() == 1 { "" } else { "s" },
                paragraph.reconstruct()
            );
        }

        let sorted = Node::with_children(
            NodeKind::Document,
            paragraphs
                .into_iter()
                .map(|(_, paragraph)| paragraph.clone())
                .collect(),
        );
        Ok(OperationReport::new("Paragraphs sorted by sentence count", body).with_tree(sorted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textree::parse;
    use std::sync::Arc;

    #[test]
    fn test_sorts_ascending_and_stable() {
        let doc = parse("A one. A two. A three.\n\nB one.\n\nC one. C two.\n\nD one.");
        let report = SortParagraphs.execute(&doc).unwrap();
        let sorted = report.tree.expect("sorted tree");

        let order: Vec<String> = sorted
            .children()
            .iter()
            .map(|paragraph| paragraph.reconstruct())
            .collect();
        assert_eq!(
            order,
            vec!["B one.", "D one.", "C one.C two.", "A one.A two.A three."]
        );
    }

    #[test]
    fn test_reuses_paragraph_nodes() {
        let doc = parse("First. Second.\n\nOnly.");
        let sorted = SortParagraphs.execute(&doc).unwrap().tree.unwrap();
        assert!(Arc::ptr_eq(sorted.child(0).unwrap(), doc.child(1).unwrap()));
        assert!(Arc::ptr_eq(sorted.child(1).unwrap(), doc.child(0).unwrap()));
        // The input is untouched
        assert_eq!(doc.child(0).unwrap().reconstruct(), "First.Second.");
    }

    #[test]
    fn test_report_body() {
        let doc = parse("Two here. And here.\n\nOne.");
        let report = SortParagraphs.execute(&doc).unwrap();
        assert_eq!(
            report.body,
            "Paragraph 2 (1 sentence):\nOne.\n\nParagraph 1 (2 sentences):\nTwo here.And here.\n\n"
        );
    }

    #[test]
    fn test_rejects_non_document() {
        let paragraph = Node::composite(NodeKind::Paragraph);
        assert!(matches!(
            SortParagraphs.execute(&paragraph),
            Err(OperationError::Unsupported { .. })
        ));
    }
}
