//! Builder pattern for ClaimScorer

use crate::config::ScorerConfig;
use crate::error::{Result, SdkError};
use crate::scorer::ClaimScorer;
use claimscore_repository::{ArtifactBundle, ArtifactPaths, ArtifactRepository, FileSystemRepository};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for ClaimScorer
///
/// # Example
///
/// ```rust,ignore
/// use claimscore_sdk::ClaimScorerBuilder;
///
/// // From a model directory
/// let scorer = ClaimScorerBuilder::new()
///     .with_model_dir("models/claim_denial")
///     .with_threshold(0.4)
///     .build()
///     .await?;
///
/// // From artifacts already in memory (for testing)
/// let scorer = ClaimScorerBuilder::new()
///     .with_artifacts(bundle)
///     .build()
///     .await?;
/// ```
pub struct ClaimScorerBuilder {
    config: ScorerConfig,
    repository: Option<Arc<dyn ArtifactRepository>>,
    artifacts: Option<ArtifactBundle>,
}

impl ClaimScorerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::from_config(ScorerConfig::new())
    }

    /// Start from an existing configuration
    pub fn from_config(config: ScorerConfig) -> Self {
        Self {
            config,
            repository: None,
            artifacts: None,
        }
    }

    /// Load artifacts from a model directory on disk
    pub fn with_model_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.model_dir = Some(path.into());
        self
    }

    /// Set artifact file names under the model directory
    pub fn with_artifact_paths(mut self, paths: ArtifactPaths) -> Self {
        self.config.artifacts = paths;
        self
    }

    /// Load artifacts from a custom repository
    pub fn with_repository(mut self, repository: Arc<dyn ArtifactRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Use artifacts directly (alternative to loading)
    pub fn with_artifacts(mut self, artifacts: ArtifactBundle) -> Self {
        self.artifacts = Some(artifacts);
        self
    }

    /// Set decision threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.config.enable_metrics = enable;
        self
    }

    /// Build the scorer
    ///
    /// Artifact sources are tried in order: in-memory artifacts, a custom
    /// repository, then the model directory.
    pub async fn build(self) -> Result<ClaimScorer> {
        let bundle = match (self.artifacts, self.repository, &self.config.model_dir) {
            (Some(artifacts), _, _) => artifacts,
            (None, Some(repository), _) => repository.load_all().await?,
            (None, None, Some(dir)) => {
                tracing::info!("Loading claim scoring artifacts from {}", dir.display());
                FileSystemRepository::with_paths(dir, self.config.artifacts.clone())?
                    .load_all()
                    .await?
            }
            (None, None, None) => {
                return Err(SdkError::ConfigError(
                    "no artifacts, repository or model directory configured".to_string(),
                ))
            }
        };

        ClaimScorer::from_artifacts(bundle, &self.config)
    }
}

impl Default for ClaimScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
