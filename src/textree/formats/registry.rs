//! Output format lookup
//!
//! The binary selects one format by name for the whole run. Formats are listed in
//! the order they are registered, with the canonical text first.

use crate::textree::ast::Node;
use crate::textree::config::OutputConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Renders a parsed tree as a string
pub trait Formatter: Send + Sync {
    /// Selector used by `--format`
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn serialize(&self, node: &Node) -> Result<String, FormatError>;
}

/// The built-in formats, configured once from [OutputConfig]
pub struct FormatRegistry {
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// text, treeviz (labels cut at the configured width), json, yaml
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            formatters: vec![
                Box::new(super::TextFormatter),
                Box::new(super::TreevizFormatter::new(config.treeviz_label_width)),
                Box::new(super::JsonFormatter),
                Box::new(super::YamlFormatter),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .iter()
            .find(|formatter| formatter.name() == name)
            .map(|formatter| formatter.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Render `node` with the format called `name`
    pub fn serialize(&self, node: &Node, name: &str) -> Result<String, FormatError> {
        self.get(name)?.serialize(node)
    }

    /// (name, description) pairs in registration order
    pub fn describe_formats(&self) -> Vec<(&str, &str)> {
        self.formatters
            .iter()
            .map(|formatter| (formatter.name(), formatter.description()))
            .collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::from_config(&OutputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textree::parse;
    use rstest::rstest;

    #[rstest]
    #[case("text", "Two plus two is 4.0.")]
    #[case("treeviz", "⧉ 1 paragraph\n")]
    #[case("json", "\"node_type\": \"document\"")]
    #[case("yaml", "node_type: document\n")]
    fn test_each_format_renders_parsed_text(#[case] format: &str, #[case] expected: &str) {
        let doc = parse("Two plus two is (2+2).");
        let output = FormatRegistry::default().serialize(&doc, format).unwrap();
        assert!(
            output.contains(expected),
            "{format} output did not contain {expected:?}:\n{output}"
        );
    }

    #[test]
    fn test_unknown_format() {
        let err = FormatRegistry::default()
            .serialize(&parse("Hi."), "xml")
            .unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("xml".to_string()));
        assert_eq!(err.to_string(), "Format 'xml' not found");
    }

    #[test]
    fn test_formats_are_listed_text_first() {
        let registry = FormatRegistry::default();
        let names: Vec<&str> = registry
            .describe_formats()
            .into_iter()
            .map(|(name, description)| {
                assert!(!description.is_empty(), "{name} has no description");
                name
            })
            .collect();
        assert_eq!(names, vec!["text", "treeviz", "json", "yaml"]);
    }

    #[test]
    fn test_configured_label_width_reaches_treeviz() {
        let config = OutputConfig {
            treeviz_label_width: 4,
            ..OutputConfig::default()
        };
        let output = FormatRegistry::from_config(&config)
            .serialize(&parse("Paragraph text."), "treeviz")
            .unwrap();
        assert_eq!(output.lines().nth(1), Some("└─ ¶ Para..."));
    }
}
