//! Appointment type normalization

use super::FeatureStage;
use crate::coerce::cell_text;
use crate::error::Result;
use crate::frame::ClaimFrame;
use claimscore_core::columns::{APPT_TYPE, NONE_LITERAL};
use claimscore_core::mapping::map_appt_type;
use claimscore_core::Value;

/// Rewrites `Appt_Type` through the fixed bucket table. Unknown labels pass
/// through verbatim and absent values become `"None"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApptTypeNormalizer;

impl FeatureStage for ApptTypeNormalizer {
    fn name(&self) -> &'static str {
        "appt_type_normalization"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        let normalized = frame
            .column_or_null(APPT_TYPE)
            .iter()
            .map(|v| match v {
                Value::Null => Value::text(NONE_LITERAL),
                Value::String(s) => Value::text(map_appt_type(s)),
                other => Value::text(cell_text(other)),
            })
            .collect();
        frame.set_column(APPT_TYPE, normalized)
    }
}
