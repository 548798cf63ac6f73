//! Integration tests for ClaimScorer

mod common;

use async_trait::async_trait;
use claimscore_repository::{RepositoryError, RepositoryResult};
use claimscore_sdk::{
    ArtifactPaths, ArtifactRepository, ClaimScorerBuilder, ExpectedSchema, ModelArtifact,
    RawClaimRecord, ScalerArtifact, SdkError,
};
use common::*;
use std::sync::Arc;

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// ========== Loading Tests ==========

#[tokio::test]
async fn test_build_from_model_dir() {
    let dir = create_model_dir();
    let scorer = ClaimScorerBuilder::new()
        .with_model_dir(dir.path())
        .build()
        .await
        .unwrap();

    assert_eq!(scorer.feature_names(), feature_names().as_slice());
    assert_eq!(scorer.threshold(), 0.34);
}

#[tokio::test]
async fn test_build_with_yaml_artifacts() {
    let dir = create_model_dir();
    std::fs::write(
        dir.path().join("model.yaml"),
        serde_yaml::to_string(&model()).unwrap(),
    )
    .unwrap();

    let scorer = ClaimScorerBuilder::new()
        .with_model_dir(dir.path())
        .with_artifact_paths(ArtifactPaths::default().with_model("model.yaml"))
        .build()
        .await
        .unwrap();

    let response = scorer.score(&covid_era_claim()).unwrap();
    assert!((response.probability - 0.5).abs() < 1e-12);
}

struct MemoryRepository;

#[async_trait]
impl ArtifactRepository for MemoryRepository {
    async fn load_model(&self) -> RepositoryResult<ModelArtifact> {
        Ok(model())
    }

    async fn load_scaler(&self) -> RepositoryResult<ScalerArtifact> {
        Ok(scaler())
    }

    async fn load_schema(&self) -> RepositoryResult<ExpectedSchema> {
        Err(RepositoryError::NotFound {
            path: "memory://expected_columns".to_string(),
        })
    }
}

#[tokio::test]
async fn test_repository_error_surfaces() {
    let err = ClaimScorerBuilder::new()
        .with_repository(Arc::new(MemoryRepository))
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::RepositoryError(RepositoryError::NotFound { .. })));
}

#[tokio::test]
async fn test_model_schema_mismatch_rejected() {
    let mut artifacts = bundle();
    let mut columns = feature_names();
    columns.swap(6, 7);
    artifacts.schema = ExpectedSchema::new(columns).unwrap();

    let err = ClaimScorerBuilder::new()
        .with_artifacts(artifacts)
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::ArtifactMismatch(_)));
}

#[tokio::test]
async fn test_invalid_threshold_rejected() {
    let err = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .with_threshold(1.2)
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::RuntimeError(_)));
}

// ========== Scoring Tests ==========

#[tokio::test]
async fn test_score_single_claim() {
    let scorer = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .build()
        .await
        .unwrap();

    let flagged = scorer.score(&covid_era_claim()).unwrap();
    assert!((flagged.probability - 0.5).abs() < 1e-12);
    assert_eq!(flagged.prediction, 1);
    assert_eq!(flagged.threshold, 0.34);

    let cleared = scorer.score(&post_covid_claim()).unwrap();
    assert!((cleared.probability - sigmoid(-1.0)).abs() < 1e-12);
    assert_eq!(cleared.prediction, 0);
}

#[tokio::test]
async fn test_threshold_override() {
    let scorer = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .with_threshold(0.25)
        .build()
        .await
        .unwrap();

    assert!(scorer.score(&post_covid_claim()).unwrap().is_flagged());
}

#[tokio::test]
async fn test_score_batch_preserves_order() {
    let scorer = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .build()
        .await
        .unwrap();

    let responses = scorer
        .score_batch(&[post_covid_claim(), covid_era_claim(), post_covid_claim()])
        .unwrap();

    let predictions: Vec<u8> = responses.iter().map(|r| r.prediction).collect();
    assert_eq!(predictions, vec![0, 1, 0]);
}

#[tokio::test]
async fn test_missing_scaled_value_fails_single_claim() {
    let scorer = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .build()
        .await
        .unwrap();

    let claim = covid_era_claim().with_field("Total_Charge", "n/a");
    let err = scorer.score(&claim).unwrap_err();
    assert!(err.to_string().contains("Total_Charge"));

    let metrics = scorer.metrics().unwrap();
    assert_eq!(metrics.snapshot().counters["errors_missing_scaled_value"], 1);
}

#[tokio::test]
async fn test_features_are_schema_aligned() {
    let scorer = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .build()
        .await
        .unwrap();

    let vectors = scorer.features(&[covid_era_claim()]).unwrap();
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0].columns(), feature_names().as_slice());
    // (150 - 120) / 40
    assert_eq!(vectors[0].get("Total_Charge"), Some(0.75));
    assert_eq!(vectors[0].get("COVID_era"), Some(1.0));
}

#[tokio::test]
async fn test_empty_batch() {
    let scorer = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .build()
        .await
        .unwrap();

    let records: Vec<RawClaimRecord> = Vec::new();
    assert!(scorer.score_batch(&records).is_err());
}

// ========== Metrics Tests ==========

#[tokio::test]
async fn test_metrics_counts() {
    let scorer = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .build()
        .await
        .unwrap();

    scorer.score(&covid_era_claim()).unwrap();
    scorer
        .score_batch(&[covid_era_claim(), post_covid_claim()])
        .unwrap();

    let snapshot = scorer.metrics().unwrap().snapshot();
    assert_eq!(snapshot.counters["claims_scored"], 3);
    assert_eq!(snapshot.counters["claims_flagged"], 2);
    assert_eq!(snapshot.counters["batches"], 2);
    assert_eq!(snapshot.histograms["scoring_duration"].count, 2);
}

#[tokio::test]
async fn test_metrics_disabled() {
    let scorer = ClaimScorerBuilder::new()
        .with_artifacts(bundle())
        .enable_metrics(false)
        .build()
        .await
        .unwrap();

    scorer.score(&covid_era_claim()).unwrap();
    assert!(scorer.metrics().is_none());
}
