//! Logistic regression classifier

use super::Classifier;
use crate::error::{Result, RuntimeError};
use claimscore_core::{CoreError, FeatureVector, ModelArtifact};

/// Binary logistic regression: `sigmoid(intercept + w·x)`
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(feature_names: Vec<String>, coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        ModelArtifact::LogisticRegression {
            feature_names: feature_names.clone(),
            coefficients: coefficients.clone(),
            intercept,
        }
        .validate()?;

        Ok(Self {
            feature_names,
            coefficients,
            intercept,
        })
    }

    /// Raw linear score before the sigmoid
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(RuntimeError::Core(CoreError::LengthMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            }));
        }

        let mut z = self.intercept;
        for ((name, x), w) in features.iter().zip(&self.coefficients) {
            if !x.is_finite() {
                return Err(RuntimeError::NonFiniteFeature(name.to_string()));
            }
            z += w * x;
        }
        Ok(z)
    }
}

impl Classifier for LogisticRegression {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<f64> {
        self.decision_function(features).map(sigmoid)
    }
}

/// Logistic function, stable for large |z|
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
