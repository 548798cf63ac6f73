//! Numeric scaling of the fitted columns

use super::FeatureStage;
use crate::error::{Result, RuntimeError};
use crate::frame::ClaimFrame;
use crate::scaler::Scaler;
use claimscore_core::Value;
use std::sync::Arc;

/// Passes the scaler's columns through the fitted transform, row by row.
///
/// Runs after schema alignment. Every scaled cell must be present by then; a
/// missing one fails the request instead of reaching the model as NaN.
#[derive(Debug, Clone)]
pub struct NumericScaling {
    scaler: Arc<dyn Scaler>,
}

impl NumericScaling {
    pub fn new(scaler: Arc<dyn Scaler>) -> Self {
        Self { scaler }
    }
}

impl FeatureStage for NumericScaling {
    fn name(&self) -> &'static str {
        "numeric_scaling"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        let columns = self.scaler.columns();
        let inputs: Vec<Vec<Value>> = columns.iter().map(|c| frame.column_or_null(c)).collect();

        let mut outputs: Vec<Vec<Value>> = vec![Vec::with_capacity(frame.n_rows()); columns.len()];
        for row in 0..frame.n_rows() {
            let raw = columns
                .iter()
                .zip(&inputs)
                .map(|(column, values)| {
                    values[row]
                        .as_f64()
                        .ok_or_else(|| RuntimeError::MissingScaledValue {
                            column: column.clone(),
                            row,
                        })
                })
                .collect::<Result<Vec<f64>>>()?;

            for (output, scaled) in outputs.iter_mut().zip(self.scaler.transform(&raw)?) {
                output.push(Value::Number(scaled));
            }
        }

        for (column, values) in columns.iter().zip(outputs) {
            frame.set_column(column.as_str(), values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaler::StandardScaler;

    fn scaler() -> Arc<dyn Scaler> {
        Arc::new(
            StandardScaler::new(
                vec!["Total_Charge".to_string(), "Patient_Age".to_string()],
                vec![100.0, 60.0],
                vec![50.0, 10.0],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_scaling_in_place() {
        let mut frame = ClaimFrame::with_rows(2);
        frame
            .set_column("Total_Charge", vec![Value::Number(150.0), Value::Number(50.0)])
            .unwrap();
        frame
            .set_column("Patient_Age", vec![Value::Number(70.0), Value::Number(60.0)])
            .unwrap();

        NumericScaling::new(scaler()).apply(&mut frame).unwrap();

        assert_eq!(
            frame.column("Total_Charge").unwrap(),
            &[Value::Number(1.0), Value::Number(-1.0)]
        );
        assert_eq!(
            frame.column("Patient_Age").unwrap(),
            &[Value::Number(1.0), Value::Number(0.0)]
        );
    }

    #[test]
    fn test_missing_scaled_value_fails() {
        let mut frame = ClaimFrame::with_rows(1);
        frame.set_column("Total_Charge", vec![Value::Null]).unwrap();
        frame.set_column("Patient_Age", vec![Value::Number(70.0)]).unwrap();

        let err = NumericScaling::new(scaler()).apply(&mut frame).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::MissingScaledValue { ref column, row: 0 } if column == "Total_Charge"
        ));
    }
}
