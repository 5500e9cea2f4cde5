//! Error types for configuration loading and page rendering.

use std::path::PathBuf;

use crate::content::ContentIssue;

/// Errors produced by the site library.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The TOML configuration could not be parsed.
    #[error("invalid config {path}: {source}")]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// Encoding the default configuration for layering failed.
    #[error("failed to encode default config: {0}")]
    ConfigDefaults(#[from] toml::ser::Error),

    /// Embedding the configuration as JSON failed.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Static content or configuration failed validation.
    #[error("{} content issue(s), first: {}", .0.len(), .0.first().map(ToString::to_string).unwrap_or_default())]
    InvalidContent(Vec<ContentIssue>),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
