//! claimscore Runtime - Feature pipeline and scoring runtime
//!
//! This crate turns raw claim records into the aligned numeric feature
//! vectors the classifier was trained on, and scores them.

pub mod coerce;
pub mod decision;
pub mod error;
pub mod frame;
pub mod model;
pub mod observability;
pub mod pipeline;
pub mod scaler;

// Re-export main types
pub use decision::{ClaimScore, DecisionThreshold, DEFAULT_THRESHOLD};
pub use error::{Result, RuntimeError};
pub use frame::ClaimFrame;
pub use model::{classifier_from_artifact, Classifier, LogisticRegression};
pub use observability::{Metrics, MetricsCollector, MetricsSnapshot};
pub use pipeline::{FeaturePipeline, FeatureStage};
pub use scaler::{scaler_from_artifact, MinMaxScaler, Scaler, StandardScaler};
