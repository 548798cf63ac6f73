//! Fitted numeric scalers
//!
//! A scaler is fitted at training time on a fixed list of numeric columns and
//! applied unchanged at scoring time. The pipeline only relies on the
//! [`Scaler`] contract; the concrete transform comes from the artifact.

use crate::error::{Result, RuntimeError};
use claimscore_core::{CoreError, ScalerArtifact};
use std::fmt::Debug;
use std::sync::Arc;

/// Fitted numeric transform over a fixed column list
pub trait Scaler: Send + Sync + Debug {
    /// Columns the scaler applies to, in the order `transform` expects
    fn columns(&self) -> &[String];

    /// Transform one row of raw values (same order as `columns`)
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>>;
}

/// Standardization: `(x - mean) / scale`
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    columns: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(columns: Vec<String>, mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        ScalerArtifact::Standard {
            columns: columns.clone(),
            mean: mean.clone(),
            scale: scale.clone(),
        }
        .validate()?;

        Ok(Self {
            columns,
            mean,
            scale,
        })
    }
}

impl Scaler for StandardScaler {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        check_width(self.columns.len(), row)?;
        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

/// Fitted min-max form: `x * scale + min`
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    columns: Vec<String>,
    min: Vec<f64>,
    scale: Vec<f64>,
}

impl MinMaxScaler {
    pub fn new(columns: Vec<String>, min: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        ScalerArtifact::MinMax {
            columns: columns.clone(),
            min: min.clone(),
            scale: scale.clone(),
        }
        .validate()?;

        Ok(Self {
            columns,
            min,
            scale,
        })
    }
}

impl Scaler for MinMaxScaler {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        check_width(self.columns.len(), row)?;
        Ok(row
            .iter()
            .zip(self.min.iter().zip(&self.scale))
            .map(|(x, (min, scale))| x * scale + min)
            .collect())
    }
}

/// Build the scaler described by an artifact
pub fn scaler_from_artifact(artifact: ScalerArtifact) -> Result<Arc<dyn Scaler>> {
    let scaler: Arc<dyn Scaler> = match artifact {
        ScalerArtifact::Standard {
            columns,
            mean,
            scale,
        } => Arc::new(StandardScaler::new(columns, mean, scale)?),
        ScalerArtifact::MinMax {
            columns,
            min,
            scale,
        } => Arc::new(MinMaxScaler::new(columns, min, scale)?),
    };
    Ok(scaler)
}

fn check_width(expected: usize, row: &[f64]) -> Result<()> {
    if row.len() != expected {
        return Err(RuntimeError::Core(CoreError::LengthMismatch {
            expected,
            actual: row.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_standard_scaler() {
        let scaler = StandardScaler::new(
            columns(&["RAF_Score", "ICD10_Code_Count"]),
            vec![1.0, 2.0],
            vec![0.5, 1.5],
        )
        .unwrap();

        assert_eq!(scaler.transform(&[2.0, 5.0]).unwrap(), vec![2.0, 2.0]);
        assert_eq!(scaler.transform(&[1.0, 2.0]).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_standard_scaler_rejects_zero_scale() {
        let result = StandardScaler::new(columns(&["RAF_Score"]), vec![1.0], vec![0.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_min_max_scaler() {
        // Fitted on ages 20..=84
        let scaler =
            MinMaxScaler::new(columns(&["Patient_Age"]), vec![-0.3125], vec![1.0 / 64.0]).unwrap();

        assert_eq!(scaler.transform(&[20.0]).unwrap(), vec![0.0]);
        assert_eq!(scaler.transform(&[84.0]).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_row_width_checked() {
        let scaler = StandardScaler::new(columns(&["a", "b"]), vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
        let err = scaler.transform(&[1.0]).unwrap_err();
        assert!(err.to_string().contains("expected 2, got 1"));
    }

    #[test]
    fn test_scaler_from_artifact() {
        let artifact = ScalerArtifact::MinMax {
            columns: columns(&["Patient_Age"]),
            min: vec![0.0],
            scale: vec![0.5],
        };
        let scaler = scaler_from_artifact(artifact).unwrap();

        assert_eq!(scaler.columns(), &["Patient_Age".to_string()]);
        assert_eq!(scaler.transform(&[4.0]).unwrap(), vec![2.0]);
    }
}
