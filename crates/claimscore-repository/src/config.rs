//! Artifact file layout

use serde::{Deserialize, Serialize};

/// File names of the three artifacts, relative to the repository root
///
/// # Examples
///
/// ```rust
/// use claimscore_repository::ArtifactPaths;
///
/// let paths = ArtifactPaths::default().with_model("model.yaml");
/// assert_eq!(paths.model, "model.yaml");
/// assert_eq!(paths.scaler, "scaler.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactPaths {
    /// Classifier artifact
    pub model: String,

    /// Fitted scaler artifact
    pub scaler: String,

    /// Expected column list
    pub schema: String,
}

impl ArtifactPaths {
    pub const DEFAULT_MODEL: &'static str = "model.json";
    pub const DEFAULT_SCALER: &'static str = "scaler.json";
    pub const DEFAULT_SCHEMA: &'static str = "expected_columns.json";

    pub fn with_model(mut self, path: impl Into<String>) -> Self {
        self.model = path.into();
        self
    }

    pub fn with_scaler(mut self, path: impl Into<String>) -> Self {
        self.scaler = path.into();
        self
    }

    pub fn with_schema(mut self, path: impl Into<String>) -> Self {
        self.schema = path.into();
        self
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_string(),
            scaler: Self::DEFAULT_SCALER.to_string(),
            schema: Self::DEFAULT_SCHEMA.to_string(),
        }
    }
}
