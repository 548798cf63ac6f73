//! Configuration types for ClaimScorer

use claimscore_repository::ArtifactPaths;
use claimscore_runtime::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Directory holding the fitted artifacts
    pub model_dir: Option<PathBuf>,

    /// Artifact file names under `model_dir`
    pub artifacts: ArtifactPaths,

    /// Probability at or above which a claim is flagged
    pub threshold: f64,

    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl ScorerConfig {
    /// Create a new scorer configuration
    pub fn new() -> Self {
        Self {
            model_dir: None,
            artifacts: ArtifactPaths::default(),
            threshold: DEFAULT_THRESHOLD,
            enable_metrics: true,
        }
    }

    /// Set the model directory
    pub fn with_model_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_dir = Some(path.into());
        self
    }

    /// Set artifact file names
    pub fn with_artifacts(mut self, artifacts: ArtifactPaths) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// Set decision threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::new()
    }
}
