//! Response types for ClaimScorer

use claimscore_runtime::ClaimScore;
use serde::{Deserialize, Serialize};

/// Score response for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// Probability that the claim is denied
    pub probability: f64,

    /// 1 if `probability >= threshold`, else 0
    pub prediction: u8,

    /// Threshold the decision was taken against
    pub threshold: f64,

    /// Processing time of the batch this claim was scored in, in milliseconds
    pub processing_time_ms: u64,
}

impl ScoreResponse {
    pub(crate) fn new(score: ClaimScore, threshold: f64, processing_time_ms: u64) -> Self {
        Self {
            probability: score.probability,
            prediction: score.prediction,
            threshold,
            processing_time_ms,
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.prediction == 1
    }
}
