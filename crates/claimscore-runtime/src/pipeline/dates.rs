//! Date decomposition and temporal features

use super::FeatureStage;
use crate::coerce::coerce_date;
use crate::error::Result;
use crate::frame::ClaimFrame;
use chrono::{Datelike, NaiveDateTime};
use claimscore_core::columns::*;
use claimscore_core::mapping::fiscal_quarter;
use claimscore_core::Value;

const SECONDS_PER_DAY: i64 = 86_400;

/// Parses the three claim dates and derives service-date features:
/// year, month, weekday, submission delays, fiscal quarter and era flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateFeatures;

impl FeatureStage for DateFeatures {
    fn name(&self) -> &'static str {
        "date_features"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        for column in DATE_COLUMNS {
            let parsed = frame.column_or_null(column).iter().map(coerce_date).collect();
            frame.set_column(column, parsed)?;
        }

        let appt: Vec<Option<NaiveDateTime>> = frame
            .column_or_null(APPT_DATE)
            .iter()
            .map(Value::as_date)
            .collect();

        let year: Vec<Option<i32>> = appt.iter().map(|d| d.map(|d| d.year())).collect();
        let month: Vec<Option<u32>> = appt.iter().map(|d| d.map(|d| d.month())).collect();

        frame.set_column(
            YEAR_SERVICE,
            year.iter().map(|y| Value::from_option(y.map(f64::from))).collect(),
        )?;
        frame.set_column(
            MONTH_SERVICE,
            month.iter().map(|m| Value::from_option(m.map(f64::from))).collect(),
        )?;
        frame.set_column(
            DAY_OF_WEEK_SERVICE,
            appt.iter()
                .map(|d| Value::from_option(d.map(|d| f64::from(d.weekday().num_days_from_monday()))))
                .collect(),
        )?;

        for (target, submitted) in [
            (INITIAL_SUBMISSION_DELAY, INITIAL_CLAIM_SUBMIT_DATE),
            (FINAL_SUBMISSION_DELAY, FINAL_CLAIM_SUBMIT_DATE),
        ] {
            let delays = frame
                .column_or_null(submitted)
                .iter()
                .zip(&appt)
                .map(|(submit, appt)| match (submit.as_date(), appt) {
                    (Some(submit), Some(appt)) => Value::Number(delay_days(*appt, submit) as f64),
                    _ => Value::Null,
                })
                .collect();
            frame.set_column(target, delays)?;
        }

        frame.set_column(
            QUARTER_SERVICE,
            month
                .iter()
                .map(|m| match m.and_then(fiscal_quarter) {
                    Some(q) => Value::text(q),
                    None => Value::Null,
                })
                .collect(),
        )?;

        let (pre, covid, post) = era_flags(&year);
        frame.set_column(PRE_COVID, pre)?;
        frame.set_column(COVID_ERA, covid)?;
        frame.set_column(POST_COVID, post)?;

        Ok(())
    }
}

/// Whole days from `from` to `to`, floored; negative when `to` is earlier
pub fn delay_days(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// 0/1 era flags per row; a missing year sets none of them
fn era_flags(years: &[Option<i32>]) -> (Vec<Value>, Vec<Value>, Vec<Value>) {
    let flag = |pred: fn(i32) -> bool| -> Vec<Value> {
        years
            .iter()
            .map(|y| Value::flag(y.map(pred).unwrap_or(false)))
            .collect()
    };

    (
        flag(|y| y < 2020),
        flag(|y| (2020..=2022).contains(&y)),
        flag(|y| y > 2022),
    )
}
