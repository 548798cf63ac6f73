//! Classifiers that turn a feature vector into a probability
//!
//! The engine only depends on the [`Classifier`] contract. Concrete models
//! are built from their persisted artifact.

mod logistic;

pub use logistic::LogisticRegression;

use crate::error::Result;
use claimscore_core::{FeatureVector, ModelArtifact};
use std::fmt::Debug;
use std::sync::Arc;

/// Binary classifier over the expected schema
pub trait Classifier: Send + Sync + Debug {
    /// Feature names the classifier was trained on, in order
    fn feature_names(&self) -> &[String];

    /// Probability of the positive class
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64>;
}

/// Build the classifier described by an artifact
pub fn classifier_from_artifact(artifact: ModelArtifact) -> Result<Arc<dyn Classifier>> {
    artifact.validate()?;
    let classifier: Arc<dyn Classifier> = match artifact {
        ModelArtifact::LogisticRegression {
            feature_names,
            coefficients,
            intercept,
        } => Arc::new(LogisticRegression::new(feature_names, coefficients, intercept)?),
    };
    Ok(classifier)
}
