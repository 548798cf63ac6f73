//! ClaimScorer implementation

use super::types::ScoreResponse;
use crate::config::ScorerConfig;
use crate::error::{Result, SdkError};
use claimscore_core::{FeatureVector, RawClaimRecord};
use claimscore_repository::ArtifactBundle;
use claimscore_runtime::observability::names;
use claimscore_runtime::{
    classifier_from_artifact, scaler_from_artifact, ClaimScore, Classifier, DecisionThreshold,
    FeaturePipeline, Metrics, MetricsCollector, RuntimeError,
};
use std::sync::Arc;
use std::time::Instant;

/// Scores claim records against a fitted model
///
/// Built once from the artifacts and shared read-only; every method takes
/// `&self`, so one scorer can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ClaimScorer {
    pipeline: FeaturePipeline,
    classifier: Arc<dyn Classifier>,
    threshold: DecisionThreshold,
    metrics: Option<Arc<MetricsCollector>>,
}

impl ClaimScorer {
    /// Build a scorer from loaded artifacts
    pub fn from_artifacts(bundle: ArtifactBundle, config: &ScorerConfig) -> Result<Self> {
        let ArtifactBundle {
            model,
            scaler,
            schema,
        } = bundle;

        check_feature_names(model.feature_names(), schema.columns())?;

        let threshold = DecisionThreshold::new(config.threshold)?;
        let scaler = scaler_from_artifact(scaler)?;
        let pipeline = FeaturePipeline::new(Arc::new(schema), scaler)?;
        let classifier = classifier_from_artifact(model)?;

        tracing::info!(
            "Claim scorer ready: {} features, threshold {}",
            pipeline.schema().len(),
            threshold.value()
        );

        Ok(Self {
            pipeline,
            classifier,
            threshold,
            metrics: config
                .enable_metrics
                .then(|| Arc::new(MetricsCollector::new())),
        })
    }

    /// Score a single claim
    pub fn score(&self, record: &RawClaimRecord) -> Result<ScoreResponse> {
        self.score_batch(std::slice::from_ref(record))?
            .pop()
            .ok_or(SdkError::RuntimeError(RuntimeError::EmptyBatch))
    }

    /// Score a batch of claims in one pipeline pass.
    ///
    /// Medians and one-hot levels are taken over the whole batch, so a claim
    /// can score differently alone than inside a batch.
    pub fn score_batch(&self, records: &[RawClaimRecord]) -> Result<Vec<ScoreResponse>> {
        let start = Instant::now();
        let scored = self.classify(records);
        let elapsed = start.elapsed();

        let scores = match scored {
            Ok(scores) => scores,
            Err(e) => {
                tracing::warn!("Scoring batch of {} claims failed: {}", records.len(), e);
                self.record_error(&e);
                return Err(e.into());
            }
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_execution_time(names::SCORING, elapsed);
            metrics.counter(names::CLAIMS_SCORED).add(scores.len() as u64);
            let flagged = scores.iter().filter(|s| s.is_flagged()).count();
            metrics.counter(names::CLAIMS_FLAGGED).add(flagged as u64);
        }

        let processing_time_ms = elapsed.as_millis() as u64;
        tracing::debug!(
            "Scored {} claims in {}ms",
            scores.len(),
            processing_time_ms
        );

        Ok(scores
            .into_iter()
            .map(|score| ScoreResponse::new(score, self.threshold.value(), processing_time_ms))
            .collect())
    }

    /// Feature vectors for a batch, without scoring
    pub fn features(&self, records: &[RawClaimRecord]) -> Result<Vec<FeatureVector>> {
        self.engineer(records).map_err(|e| {
            self.record_error(&e);
            e.into()
        })
    }

    /// Feature vector for a single claim
    pub fn features_one(&self, record: &RawClaimRecord) -> Result<FeatureVector> {
        self.features(std::slice::from_ref(record))?
            .pop()
            .ok_or(SdkError::RuntimeError(RuntimeError::EmptyBatch))
    }

    pub fn threshold(&self) -> f64 {
        self.threshold.value()
    }

    /// Output columns, in order
    pub fn feature_names(&self) -> &[String] {
        self.pipeline.schema().columns()
    }

    /// Collected metrics, when enabled
    pub fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_deref()
    }

    fn engineer(&self, records: &[RawClaimRecord]) -> std::result::Result<Vec<FeatureVector>, RuntimeError> {
        let start = Instant::now();
        let vectors = self.pipeline.transform(records)?;

        if let Some(metrics) = &self.metrics {
            metrics.record_execution_time(names::FEATURES, start.elapsed());
            metrics.counter(names::BATCHES).inc();
        }
        Ok(vectors)
    }

    fn classify(
        &self,
        records: &[RawClaimRecord],
    ) -> std::result::Result<Vec<ClaimScore>, RuntimeError> {
        self.engineer(records)?
            .iter()
            .map(|features| {
                let probability = self.classifier.predict_proba(features)?;
                self.threshold.decide(probability)
            })
            .collect()
    }

    fn record_error(&self, error: &RuntimeError) {
        if let Some(metrics) = &self.metrics {
            metrics.record_error(error.kind());
        }
    }
}

fn check_feature_names(model: &[String], schema: &[String]) -> Result<()> {
    if model.len() != schema.len() {
        return Err(SdkError::ArtifactMismatch(format!(
            "model has {} features, schema has {} columns",
            model.len(),
            schema.len()
        )));
    }

    if let Some((i, (m, s))) = model.iter().zip(schema).enumerate().find(|(_, (m, s))| m != s) {
        return Err(SdkError::ArtifactMismatch(format!(
            "feature {} is '{}' in the model but '{}' in the schema",
            i, m, s
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_check_feature_names() {
        assert!(check_feature_names(&names(&["a", "b"]), &names(&["a", "b"])).is_ok());

        let err = check_feature_names(&names(&["a", "b"]), &names(&["b", "a"])).unwrap_err();
        assert!(err.to_string().contains("feature 0 is 'a'"));

        let err = check_feature_names(&names(&["a"]), &names(&["a", "b"])).unwrap_err();
        assert!(matches!(err, SdkError::ArtifactMismatch(_)));
    }
}
