//! claimscore Core - Core types and definitions for the claim scoring engine
//!
//! This crate provides the fundamental types used across the claimscore crates:
//! - Value types for frame cells
//! - Raw claim records as submitted
//! - The expected schema and the engineered feature vector
//! - Fitted artifact definitions (scaler, classifier)
//! - Column names and fixed lookup tables of the feature space
//! - Error types

pub mod artifact;
pub mod columns;
pub mod error;
pub mod mapping;
pub mod types;

// Re-export commonly used types
pub use artifact::{ModelArtifact, ScalerArtifact};
pub use error::{CoreError, Result};
pub use types::{ExpectedSchema, FeatureVector, RawClaimRecord, Value};
