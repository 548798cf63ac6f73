//! CLI configuration

use claimscore_sdk::{ArtifactPaths, ScorerConfig, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scorer settings read from `config/claimscore.*` and `CLAIMSCORE_*`
/// environment variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Directory holding the fitted artifacts
    pub model_dir: PathBuf,

    /// Classifier artifact file name
    pub model_file: String,

    /// Scaler artifact file name
    pub scaler_file: String,

    /// Expected column list file name
    pub schema_file: String,

    /// Decision threshold
    pub threshold: f64,

    /// Enable metrics
    pub enable_metrics: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("model"),
            model_file: ArtifactPaths::DEFAULT_MODEL.to_string(),
            scaler_file: ArtifactPaths::DEFAULT_SCALER.to_string(),
            schema_file: ArtifactPaths::DEFAULT_SCHEMA.to_string(),
            threshold: DEFAULT_THRESHOLD,
            enable_metrics: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables and config file
    ///
    /// `file` replaces the default `config/claimscore` location.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config/claimscore").required(false),
        };

        let config_result = config::Config::builder()
            .add_source(source)
            .add_source(config::Environment::with_prefix("CLAIMSCORE"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) if file.is_some() => Err(anyhow::anyhow!("Failed to read config: {}", e)),
            Err(_) => {
                tracing::info!("No config file found, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Scorer configuration for the SDK
    pub fn scorer_config(&self) -> ScorerConfig {
        ScorerConfig::new()
            .with_model_dir(&self.model_dir)
            .with_artifacts(
                ArtifactPaths::default()
                    .with_model(&self.model_file)
                    .with_scaler(&self.scaler_file)
                    .with_schema(&self.schema_file),
            )
            .with_threshold(self.threshold)
            .enable_metrics(self.enable_metrics)
    }
}
