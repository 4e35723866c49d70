//! Top-level error type for callers that drive the whole pipeline

use crate::textree::config::ConfigError;
use crate::textree::formats::FormatError;
use crate::textree::operations::OperationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextreeError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl TextreeError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TextreeError::Read {
            path: path.into(),
            source,
        }
    }
}
