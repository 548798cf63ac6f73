//! Data types for claimscore
//!
//! This module contains the data model of the scoring engine:
//! - Frame cell values
//! - Raw claim records
//! - The expected schema
//! - Engineered feature vectors

pub mod record;
pub mod schema;
pub mod value;
pub mod vector;

pub use record::RawClaimRecord;
pub use schema::ExpectedSchema;
pub use value::Value;
pub use vector::FeatureVector;
