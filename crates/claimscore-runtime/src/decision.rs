//! Thresholded decision over a classifier probability

use crate::error::{Result, RuntimeError};
use serde::{Deserialize, Serialize};

/// Default operating threshold chosen when the model was validated
pub const DEFAULT_THRESHOLD: f64 = 0.34;

/// Probability cut-off at or above which a claim is flagged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DecisionThreshold(f64);

impl DecisionThreshold {
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(RuntimeError::InvalidThreshold(threshold));
        }
        Ok(Self(threshold))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Turn a probability into a scored decision
    pub fn decide(&self, probability: f64) -> Result<ClaimScore> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RuntimeError::InvalidProbability(probability));
        }
        Ok(ClaimScore {
            probability,
            prediction: u8::from(probability >= self.0),
        })
    }
}

impl Default for DecisionThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<f64> for DecisionThreshold {
    type Error = RuntimeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DecisionThreshold> for f64 {
    fn from(threshold: DecisionThreshold) -> Self {
        threshold.0
    }
}

/// Probability and binary decision for one claim
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimScore {
    /// Classifier probability of the positive class, in [0, 1]
    pub probability: f64,

    /// 1 if `probability >= threshold`, else 0
    pub prediction: u8,
}

impl ClaimScore {
    pub fn is_flagged(&self) -> bool {
        self.prediction == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let threshold = DecisionThreshold::default();

        assert_eq!(threshold.decide(0.34).unwrap().prediction, 1);
        assert_eq!(threshold.decide(0.3399).unwrap().prediction, 0);
        assert!(threshold.decide(0.9).unwrap().is_flagged());
        assert!(!threshold.decide(0.0).unwrap().is_flagged());
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(DecisionThreshold::new(1.5).is_err());
        assert!(DecisionThreshold::new(f64::NAN).is_err());
        assert!(DecisionThreshold::new(0.0).is_ok());
    }

    #[test]
    fn test_invalid_probability() {
        let err = DecisionThreshold::default().decide(-0.1).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidProbability(_)));
    }

    #[test]
    fn test_threshold_serde() {
        let threshold: DecisionThreshold = serde_json::from_str("0.5").unwrap();
        assert_eq!(threshold.value(), 0.5);
        assert!(serde_json::from_str::<DecisionThreshold>("2.0").is_err());
    }
}
