//! Coercion of submitted text into typed cells
//!
//! Every stage that needs a number or a date goes through these helpers, so a
//! malformed field behaves the same wherever it appears: it becomes missing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use claimscore_core::Value;

/// Date-only formats accepted for claim dates
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time formats accepted for claim dates. `%.f` also matches no fraction.
const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// Parse a cell as a number; anything unparseable is missing
pub fn parse_or_missing(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if !n.is_nan() => Some(*n),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        _ => None,
    }
}

/// Coerce a whole column with [`parse_or_missing`]
pub fn coerce_numeric(values: &[Value]) -> Vec<Value> {
    values
        .iter()
        .map(|v| Value::from_option(parse_or_missing(v)))
        .collect()
}

/// Parse a claim date; unparseable or empty text is missing
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    // Keep the wall-clock date as written; converting to UTC can move it
    // across a day, month or quarter boundary.
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.naive_local())
}

/// Coerce a cell to a date cell
pub fn coerce_date(value: &Value) -> Value {
    match value {
        Value::Date(d) => Value::Date(*d),
        Value::String(s) => parse_date(s).map(Value::Date).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Round to `decimals` places, ties to even
pub fn round_half_even(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round_ties_even() / factor
}

/// Shortest round-trip rendering of a float with at least one decimal
/// (`150.0`, `99.5`); missing renders as `nan`.
///
/// Exponents carry a sign and at least two digits (`1e+16`, `1.5e-05`).
pub fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        let text = if x > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let text = format!("{:?}", x);
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!("{}e{:+03}", mantissa, exponent),
            Err(_) => text,
        },
        None => text,
    }
}

/// Text rendering of a cell used when building combination features
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "nan".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => float_repr(*n),
        Value::String(s) => s.clone(),
        Value::Date(d) => d.to_string(),
    }
}
