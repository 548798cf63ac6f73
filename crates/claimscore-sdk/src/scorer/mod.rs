//! Claim scorer - feature pipeline plus classifier plus decision threshold

mod engine;
mod types;

pub use engine::ClaimScorer;
pub use types::ScoreResponse;
