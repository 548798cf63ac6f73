//! Error types for claimscore Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
