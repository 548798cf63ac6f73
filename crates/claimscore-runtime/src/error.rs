//! Runtime error types

use claimscore_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Core type error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No records were passed to the pipeline
    #[error("Empty batch: at least one claim record is required")]
    EmptyBatch,

    /// Pipeline cannot be built from the given artifacts
    #[error("Invalid pipeline: {0}")]
    InvalidPipeline(String),

    /// A scaled column is still missing when the scaler runs
    #[error("Missing value for scaled column '{column}' in row {row}")]
    MissingScaledValue { column: String, row: usize },

    /// A non-numeric cell survived schema alignment
    #[error("Non-numeric value of type {found} in feature '{column}' (row {row})")]
    NonNumericFeature {
        column: String,
        row: usize,
        found: &'static str,
    },

    /// The classifier received a NaN or infinite feature
    #[error("Non-finite value in feature '{0}'")]
    NonFiniteFeature(String),

    /// A column write did not match the frame height
    #[error("Column '{column}' has {actual} rows, frame has {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Probability outside [0, 1]
    #[error("Invalid probability: {0}")]
    InvalidProbability(f64),

    /// Decision threshold outside [0, 1]
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(f64),
}

impl RuntimeError {
    /// Short stable label for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeError::Core(_) => "core",
            RuntimeError::EmptyBatch => "empty_batch",
            RuntimeError::InvalidPipeline(_) => "invalid_pipeline",
            RuntimeError::MissingScaledValue { .. } => "missing_scaled_value",
            RuntimeError::NonNumericFeature { .. } => "non_numeric_feature",
            RuntimeError::NonFiniteFeature(_) => "non_finite_feature",
            RuntimeError::ColumnLength { .. } => "column_length",
            RuntimeError::InvalidProbability(_) => "invalid_probability",
            RuntimeError::InvalidThreshold(_) => "invalid_threshold",
        }
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_scaled_value_display() {
        let err = RuntimeError::MissingScaledValue {
            column: "RAF_Score".to_string(),
            row: 0,
        };
        assert_eq!(
            err.to_string(),
            "Missing value for scaled column 'RAF_Score' in row 0"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(RuntimeError::EmptyBatch.kind(), "empty_batch");
        assert_eq!(
            RuntimeError::NonFiniteFeature("Patient_Sex".to_string()).kind(),
            "non_finite_feature"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: RuntimeError = CoreError::InvalidSchema("schema has no columns".to_string()).into();
        assert_eq!(err.to_string(), "Invalid schema: schema has no columns");
    }
}
