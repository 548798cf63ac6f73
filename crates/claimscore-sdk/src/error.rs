//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Artifact loading error
    #[error("Repository error: {0}")]
    RepositoryError(#[from] claimscore_repository::RepositoryError),

    /// Artifact definition error
    #[error("Artifact error: {0}")]
    CoreError(#[from] claimscore_core::CoreError),

    /// Feature pipeline or scoring error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] claimscore_runtime::RuntimeError),

    /// Artifacts load individually but do not fit together
    #[error("Artifact mismatch: {0}")]
    ArtifactMismatch(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
