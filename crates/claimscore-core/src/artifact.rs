//! Fitted artifact definitions
//!
//! Artifacts are produced at training time and loaded once at startup. These
//! types describe their persisted form; the runtime builds the behaviour.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Persisted numeric scaler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    /// Standardization: `(x - mean) / scale`
    Standard {
        columns: Vec<String>,
        mean: Vec<f64>,
        scale: Vec<f64>,
    },

    /// Fitted min-max form: `x * scale + min`
    MinMax {
        columns: Vec<String>,
        min: Vec<f64>,
        scale: Vec<f64>,
    },
}

impl ScalerArtifact {
    /// Columns the scaler was fitted on, in order
    pub fn columns(&self) -> &[String] {
        match self {
            ScalerArtifact::Standard { columns, .. } | ScalerArtifact::MinMax { columns, .. } => {
                columns
            }
        }
    }

    /// Check that all parameter lists line up and are usable
    pub fn validate(&self) -> Result<()> {
        let (columns, offset, scale, offset_name) = match self {
            ScalerArtifact::Standard {
                columns,
                mean,
                scale,
            } => (columns, mean, scale, "mean"),
            ScalerArtifact::MinMax {
                columns,
                min,
                scale,
            } => (columns, min, scale, "min"),
        };

        if columns.is_empty() {
            return Err(CoreError::InvalidArtifact(
                "scaler has no columns".to_string(),
            ));
        }
        check_len(offset_name, columns.len(), offset.len())?;
        check_len("scale", columns.len(), scale.len())?;

        for (i, column) in columns.iter().enumerate() {
            if !offset[i].is_finite() || !scale[i].is_finite() {
                return Err(CoreError::InvalidArtifact(format!(
                    "scaler parameters for '{}' are not finite",
                    column
                )));
            }
        }

        // Standardization divides by scale
        if let ScalerArtifact::Standard { scale, .. } = self {
            if let Some(i) = scale.iter().position(|s| *s == 0.0) {
                return Err(CoreError::InvalidArtifact(format!(
                    "scaler scale for '{}' is zero",
                    columns[i]
                )));
            }
        }

        Ok(())
    }
}

/// Persisted classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Binary logistic regression over the expected schema
    LogisticRegression {
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

impl ModelArtifact {
    /// Feature names the model was trained on, in order
    pub fn feature_names(&self) -> &[String] {
        match self {
            ModelArtifact::LogisticRegression { feature_names, .. } => feature_names,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ModelArtifact::LogisticRegression {
                feature_names,
                coefficients,
                intercept,
            } => {
                if feature_names.is_empty() {
                    return Err(CoreError::InvalidArtifact(
                        "model has no features".to_string(),
                    ));
                }
                check_len("coefficients", feature_names.len(), coefficients.len())?;
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(CoreError::InvalidArtifact(
                        "model parameters are not finite".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn check_len(what: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(CoreError::InvalidArtifact(format!(
            "{} has {} entries, expected {}",
            what, actual, expected
        )));
    }
    Ok(())
}
