//! Missing-value handling
//!
//! Medians are taken over the batch being scored, not over the training set.
//! For a batch of one, a missing value therefore has nothing to borrow from
//! and stays missing; the scaler later rejects it.

use super::FeatureStage;
use crate::coerce::coerce_numeric;
use crate::error::Result;
use crate::frame::ClaimFrame;
use claimscore_core::columns::{IMPUTED_COLUMNS, PATIENT_AGE, RAF_SCORE};
use claimscore_core::Value;

/// Coerces `RAF_Score` and `Patient_Age` to numbers and fills missing
/// `RAF_Score` and submission delays with the batch median.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianImputer;

impl FeatureStage for MedianImputer {
    fn name(&self) -> &'static str {
        "median_imputation"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        for column in [RAF_SCORE, PATIENT_AGE] {
            let coerced = coerce_numeric(&frame.column_or_null(column));
            frame.set_column(column, coerced)?;
        }

        for column in IMPUTED_COLUMNS {
            let values = frame.column_or_null(column);
            let fill = median(&values);
            if fill.is_none() {
                tracing::debug!("No values to impute '{}' from in this batch", column);
            }

            let filled = values
                .into_iter()
                .map(|v| if v.is_null() { Value::from_option(fill) } else { v })
                .collect();
            frame.set_column(column, filled)?;
        }

        Ok(())
    }
}

/// Median of the present numeric cells; `None` if there are none
pub fn median(values: &[Value]) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().filter_map(Value::as_f64).collect();
    if present.is_empty() {
        return None;
    }

    present.sort_by(f64::total_cmp);
    let mid = present.len() / 2;
    if present.len() % 2 == 0 {
        Some((present[mid - 1] + present[mid]) / 2.0)
    } else {
        Some(present[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimscore_core::columns::{FINAL_SUBMISSION_DELAY, INITIAL_SUBMISSION_DELAY};
    use claimscore_core::RawClaimRecord;

    #[test]
    fn test_median() {
        let odd = [Value::Number(3.0), Value::Number(1.0), Value::Number(2.0)];
        assert_eq!(median(&odd), Some(2.0));

        let even = [
            Value::Number(4.0),
            Value::Null,
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ];
        assert_eq!(median(&even), Some(2.5));

        assert_eq!(median(&[Value::Null, Value::Null]), None);
    }

    #[test]
    fn test_raf_score_filled_with_batch_median() {
        let records = vec![
            RawClaimRecord::new().with_field(RAF_SCORE, "1.0"),
            RawClaimRecord::new().with_field(RAF_SCORE, "not a score"),
            RawClaimRecord::new().with_field(RAF_SCORE, "2.0"),
            RawClaimRecord::new().with_field(RAF_SCORE, "4.0"),
        ];
        let mut frame = ClaimFrame::from_records(&records);
        MedianImputer.apply(&mut frame).unwrap();

        assert_eq!(
            frame.column(RAF_SCORE).unwrap(),
            &[
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(2.0),
                Value::Number(4.0)
            ]
        );
    }

    #[test]
    fn test_delays_filled_with_batch_median() {
        let mut frame = ClaimFrame::with_rows(3);
        frame
            .set_column(
                INITIAL_SUBMISSION_DELAY,
                vec![Value::Number(5.0), Value::Null, Value::Number(9.0)],
            )
            .unwrap();
        MedianImputer.apply(&mut frame).unwrap();

        assert_eq!(frame.cell(INITIAL_SUBMISSION_DELAY, 1), Some(&Value::Number(7.0)));
        // Nothing to take a median of
        assert!(frame.cell(FINAL_SUBMISSION_DELAY, 1).unwrap().is_null());
    }

    #[test]
    fn test_single_record_missing_value_stays_missing() {
        let mut frame =
            ClaimFrame::from_records(&[RawClaimRecord::new().with_field(RAF_SCORE, "n/a")]);
        MedianImputer.apply(&mut frame).unwrap();
        assert!(frame.cell(RAF_SCORE, 0).unwrap().is_null());
    }

    #[test]
    fn test_patient_age_coerced_not_imputed() {
        let records = vec![
            RawClaimRecord::new().with_field(PATIENT_AGE, "67"),
            RawClaimRecord::new().with_field(PATIENT_AGE, "sixty"),
        ];
        let mut frame = ClaimFrame::from_records(&records);
        MedianImputer.apply(&mut frame).unwrap();

        assert_eq!(
            frame.column(PATIENT_AGE).unwrap(),
            &[Value::Number(67.0), Value::Null]
        );
    }
}
