//! Diagnosis/procedure combination features

use super::FeatureStage;
use crate::coerce::{cell_text, coerce_numeric, float_repr, parse_or_missing, round_half_even};
use crate::error::Result;
use crate::frame::ClaimFrame;
use claimscore_core::columns::*;
use claimscore_core::Value;

/// Counts filled diagnosis slots, fills empty ones with `"None"`, and builds
/// the procedure x diagnosis and procedure x charge combination features.
///
/// `Total_Charge` is coerced to a number here; a malformed charge stays
/// missing and shows up as `nan` inside `Procedure_Charge_Pair`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CombinationFeatures;

impl FeatureStage for CombinationFeatures {
    fn name(&self) -> &'static str {
        "combination_features"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        let rows = frame.n_rows();
        let slots = icd10_slots();

        // Count before filling
        let mut counts = vec![0usize; rows];
        for slot in &slots {
            for (row, cell) in frame.column_or_null(slot).iter().enumerate() {
                if !cell.is_null() {
                    counts[row] += 1;
                }
            }
        }
        frame.set_column(
            ICD10_CODE_COUNT,
            counts.into_iter().map(|c| Value::Number(c as f64)).collect(),
        )?;

        let procedure: Vec<String> = frame
            .column_or_null(PROCEDURE_CODE)
            .iter()
            .map(cell_text)
            .collect();

        for (i, slot) in slots.iter().enumerate() {
            let filled: Vec<Value> = frame
                .column_or_null(slot)
                .into_iter()
                .map(|cell| match cell {
                    Value::Null => Value::text(NONE_LITERAL),
                    Value::String(_) => cell,
                    other => Value::text(cell_text(&other)),
                })
                .collect();

            let combos = filled
                .iter()
                .zip(&procedure)
                .map(|(code, proc)| match code.as_str() {
                    Some(NONE_LITERAL) | None => Value::text(NONE_LITERAL),
                    Some(code) => Value::text(format!("{}_{}", proc, code)),
                })
                .collect();

            frame.set_column(slot.as_str(), filled)?;
            frame.set_column(procedure_icd10_combo(i + 1), combos)?;
        }

        let charge = coerce_numeric(&frame.column_or_null(TOTAL_CHARGE));
        let pairs = charge
            .iter()
            .zip(&procedure)
            .map(|(charge, proc)| {
                let rounded = parse_or_missing(charge)
                    .map(|c| round_half_even(c, 2))
                    .unwrap_or(f64::NAN);
                Value::text(format!("{}_{}", proc, float_repr(rounded)))
            })
            .collect();

        frame.set_column(TOTAL_CHARGE, charge)?;
        frame.set_column(PROCEDURE_CHARGE_PAIR, pairs)?;

        Ok(())
    }
}
