//! Configuration loader
//!
//! `defaults/textree.default.toml` is embedded into the crate so that docs and
//! runtime behavior stay in sync. Callers layer user files and single-key overrides
//! on top of those defaults via [`Loader`] before deserializing into
//! [`TextreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/textree.default.toml");

/// Minimum sentence length used when the configured value is unusable
pub const DEFAULT_MIN_WORD_COUNT: usize = 3;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextreeConfig {
    pub parsing: ParsingConfig,
    pub operations: OperationsConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Knobs for the stage chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub evaluate_arithmetic: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            evaluate_arithmetic: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperationsConfig {
    /// Signed so that a bad value can be reported instead of failing to load
    pub min_word_count: i64,
}

impl OperationsConfig {
    /// The configured minimum, or the default when it is zero or negative
    pub fn effective_min_word_count(&self) -> usize {
        match usize::try_from(self.min_word_count) {
            Ok(count) if count > 0 => count,
            _ => {
                warn!(
                    configured = self.min_word_count,
                    fallback = DEFAULT_MIN_WORD_COUNT,
                    "min_word_count must be positive, using the default"
                );
                DEFAULT_MIN_WORD_COUNT
            }
        }
    }
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self {
            min_word_count: DEFAULT_MIN_WORD_COUNT as i64,
        }
    }
}

/// Output selection for the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub treeviz_label_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            treeviz_label_width: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TextreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TextreeConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.parsing.evaluate_arithmetic);
        assert_eq!(config.operations.min_word_count, 3);
        assert_eq!(config.output.format, "text");
        assert_eq!(config.output.treeviz_label_width, 30);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn embedded_defaults_match_default_impl() {
        let loaded = load_defaults().expect("defaults to deserialize");
        let built = TextreeConfig::default();
        assert_eq!(loaded.parsing, built.parsing);
        assert_eq!(loaded.operations, built.operations);
        assert_eq!(loaded.output, built.output);
        assert_eq!(loaded.logging, built.logging);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "treeviz")
            .expect("override to apply")
            .set_override("operations.min_word_count", 5_i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "treeviz");
        assert_eq!(config.operations.effective_min_word_count(), 5);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parsing]\nevaluate_arithmetic = false").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(!config.parsing.evaluate_arithmetic);
        // Untouched keys keep their defaults
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/definitely/not/here/textree.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/textree.toml")
            .build()
            .expect("config to build");
        assert!(config.parsing.evaluate_arithmetic);
    }

    #[test]
    fn non_positive_min_word_count_falls_back() {
        for configured in [0, -4] {
            let operations = OperationsConfig {
                min_word_count: configured,
            };
            assert_eq!(
                operations.effective_min_word_count(),
                DEFAULT_MIN_WORD_COUNT
            );
        }
    }
}
