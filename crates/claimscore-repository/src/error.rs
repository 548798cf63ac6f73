//! Error types for the repository layer

use claimscore_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while loading artifacts
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// File not found at the specified path
    #[error("Artifact not found: {path}")]
    NotFound { path: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// File extension is neither JSON nor YAML
    #[error("Unsupported artifact format: {path}")]
    UnsupportedFormat { path: String },

    /// Artifact parsed but failed validation
    #[error("Invalid artifact {path}: {source}")]
    InvalidArtifact {
        path: String,
        #[source]
        source: CoreError,
    },

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}
