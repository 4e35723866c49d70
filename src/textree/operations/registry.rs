//! Operation trait and registry
//!
//! Operations are kept in registration order; the 1-based position is the number a
//! user can select an operation by, alongside its name.

use crate::textree::ast::{Node, NodeKind};
use crate::textree::config::OperationsConfig;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Operation '{operation}' cannot run on a {kind} node")]
    Unsupported {
        operation: &'static str,
        kind: NodeKind,
    },
}

/// Outcome of running an operation
#[derive(Debug, Clone)]
pub struct OperationReport {
    pub title: String,
    pub body: String,
    /// Rearranged tree, for operations that produce one
    pub tree: Option<Arc<Node>>,
}

impl OperationReport {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tree: None,
        }
    }

    pub fn with_tree(mut self, tree: Node) -> Self {
        self.tree = Some(Arc::new(tree));
        self
    }
}

impl fmt::Display for OperationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "=== {} ===\n\n{}", self.title, self.body)
    }
}

/// A read-only pass over a tree
pub trait Operation: Send + Sync {
    /// Selector name, e.g. "sort-paragraphs"
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn execute(&self, node: &Node) -> Result<OperationReport, OperationError>;
}

/// Ordered registry of operations
pub struct OperationRegistry {
    operations: Vec<Box<dyn Operation>>,
}

impl OperationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Register an operation, replacing any with the same name in place
    pub fn register<O: Operation + 'static>(&mut self, operation: O) {
        match self
            .operations
            .iter()
            .position(|existing| existing.name() == operation.name())
        {
            Some(index) => self.operations[index] = Box::new(operation),
            None => self.operations.push(Box::new(operation)),
        }
    }

    /// Look up an operation by 1-based number or by name
    pub fn get(&self, selector: &str) -> Result<&dyn Operation, OperationError> {
        let selector = selector.trim();
        let found = match selector.parse::<usize>() {
            Ok(number) => self.by_number(number),
            Err(_) => self
                .operations
                .iter()
                .find(|operation| operation.name() == selector)
                .map(|operation| operation.as_ref()),
        };
        found.ok_or_else(|| OperationError::UnknownOperation(selector.to_string()))
    }

    pub fn by_number(&self, number: usize) -> Option<&dyn Operation> {
        number
            .checked_sub(1)
            .and_then(|index| self.operations.get(index))
            .map(|operation| operation.as_ref())
    }

    /// Run the selected operation
    pub fn execute(&self, selector: &str, node: &Node) -> Result<OperationReport, OperationError> {
        self.get(selector)?.execute(node)
    }

    /// (number, name, description) of every operation, in order
    pub fn list(&self) -> Vec<(usize, &str, &str)> {
        self.operations
            .iter()
            .enumerate()
            .map(|(index, operation)| (index + 1, operation.name(), operation.description()))
            .collect()
    }

    /// The five built-in operations with default settings
    pub fn with_defaults() -> Self {
        Self::from_config(&OperationsConfig::default())
    }

    pub fn from_config(config: &OperationsConfig) -> Self {
        let mut registry = Self::new();

        registry.register(super::SortParagraphs);
        registry.register(super::LongestWord);
        registry.register(super::RemoveShortSentences::new(
            config.effective_min_word_count(),
        ));
        registry.register(super::IdenticalWords);
        registry.register(super::VowelsConsonants);

        registry
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
