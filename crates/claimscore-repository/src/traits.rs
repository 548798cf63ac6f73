//! Core trait definitions for artifact loading

use async_trait::async_trait;
use claimscore_core::{ExpectedSchema, ModelArtifact, ScalerArtifact};

use crate::RepositoryResult;

/// The three artifacts a scorer is built from
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactBundle {
    pub model: ModelArtifact,
    pub scaler: ScalerArtifact,
    pub schema: ExpectedSchema,
}

/// Storage backend for fitted artifacts
///
/// Implementations return artifacts that already passed their own
/// structural validation. Cross-artifact consistency (model features vs.
/// schema, scaler columns vs. schema) is checked by the consumer.
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// Load the classifier artifact
    async fn load_model(&self) -> RepositoryResult<ModelArtifact>;

    /// Load the fitted scaler artifact
    async fn load_scaler(&self) -> RepositoryResult<ScalerArtifact>;

    /// Load the expected column list
    async fn load_schema(&self) -> RepositoryResult<ExpectedSchema>;

    /// Load all three artifacts
    async fn load_all(&self) -> RepositoryResult<ArtifactBundle> {
        let (model, scaler, schema) =
            tokio::try_join!(self.load_model(), self.load_scaler(), self.load_schema())?;

        Ok(ArtifactBundle {
            model,
            scaler,
            schema,
        })
    }
}
