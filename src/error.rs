//! Error types for apiscout

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for apiscout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Hard failures while discovering definitions.
///
/// Unreadable or malformed repository files are not errors; they are logged
/// and skipped. Only conditions that would otherwise loop forever end up here.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Metadata reference cycle detected at {}", path.display())]
    ReferenceCycle { path: PathBuf },

    #[error("Metadata reference chain exceeds {depth} links at {}", path.display())]
    ReferenceDepthExceeded { depth: usize, path: PathBuf },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(
        "Invalid destination path variable `{{{0}}}`. Use {{title}}, {{repoId}}, {{orgId}} or {{metadata.<field>}}."
    )]
    InvalidDestinationVariable(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
