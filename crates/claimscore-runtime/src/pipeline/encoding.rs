//! Binary and cyclical encodings

use super::FeatureStage;
use crate::error::Result;
use crate::frame::ClaimFrame;
use claimscore_core::columns::*;
use claimscore_core::Value;
use std::f64::consts::PI;

/// Encodes `Patient_Sex` as 0/1 and the service month and weekday as
/// sine/cosine pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct CyclicalEncoder;

impl FeatureStage for CyclicalEncoder {
    fn name(&self) -> &'static str {
        "binary_cyclical_encoding"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        let sex = frame
            .column_or_null(PATIENT_SEX)
            .iter()
            .map(|v| Value::from_option(v.as_str().and_then(encode_sex)))
            .collect();
        frame.set_column(PATIENT_SEX, sex)?;

        for (source, period, sin_column, cos_column) in [
            (MONTH_SERVICE, 12.0, MONTH_SERVICE_SIN, MONTH_SERVICE_COS),
            (DAY_OF_WEEK_SERVICE, 7.0, WEEKDAY_SERVICE_SIN, WEEKDAY_SERVICE_COS),
        ] {
            let pairs: Vec<Option<(f64, f64)>> = frame
                .column_or_null(source)
                .iter()
                .map(|v| v.as_f64().map(|x| cyclical(x, period)))
                .collect();

            frame.set_column(
                sin_column,
                pairs.iter().map(|p| Value::from_option(p.map(|(s, _)| s))).collect(),
            )?;
            frame.set_column(
                cos_column,
                pairs.iter().map(|p| Value::from_option(p.map(|(_, c)| c))).collect(),
            )?;
        }

        Ok(())
    }
}

/// `M` -> 0, `F` -> 1; anything else has no encoding
pub fn encode_sex(value: &str) -> Option<f64> {
    match value {
        "M" => Some(0.0),
        "F" => Some(1.0),
        _ => None,
    }
}

/// (sin, cos) of `2π·value/period`
pub fn cyclical(value: f64, period: f64) -> (f64, f64) {
    let angle = 2.0 * PI * value / period;
    (angle.sin(), angle.cos())
}
