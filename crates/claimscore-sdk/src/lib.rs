//! claimscore SDK
//!
//! High-level API for scoring insurance claims: load the fitted artifacts,
//! turn raw claim records into feature vectors and return the denial
//! probability with its thresholded decision.
//!
//! ```no_run
//! use claimscore_sdk::{ClaimScorerBuilder, RawClaimRecord};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let scorer = ClaimScorerBuilder::new()
//!     .with_model_dir("models/claim_denial")
//!     .build()
//!     .await?;
//!
//! let claim = RawClaimRecord::new()
//!     .with_field("Appt_Date", "2021-06-15")
//!     .with_field("Total_Charge", "150");
//! let response = scorer.score(&claim)?;
//! println!("p = {:.3}, flagged = {}", response.probability, response.prediction);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod scorer;

// Re-export main types
pub use builder::ClaimScorerBuilder;
pub use config::ScorerConfig;
pub use error::{Result, SdkError};
pub use scorer::{ClaimScorer, ScoreResponse};

// Re-export commonly used types from dependencies
pub use claimscore_core::{ExpectedSchema, FeatureVector, ModelArtifact, RawClaimRecord, ScalerArtifact};
pub use claimscore_repository::{ArtifactBundle, ArtifactPaths, ArtifactRepository, FileSystemRepository};
pub use claimscore_runtime::{ClaimScore, MetricsCollector, MetricsSnapshot, DEFAULT_THRESHOLD};
