//! Configuration error types.

use std::path::PathBuf;

/// Configuration error.
///
/// Every variant is terminal for a build: a site must not be rendered with
/// partial or undefined navigation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required field is missing or a value fails a constraint.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Structurally unexpected input.
    #[error("Unexpected configuration shape at {path}: {message}")]
    Schema {
        /// Field path of the offending node (e.g. "`themeConfig.nav[2]`").
        path: String,
        /// What was expected there.
        message: String,
    },
}
