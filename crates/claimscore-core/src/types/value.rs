//! Cell values of a claim frame
//!
//! The `Value` enum represents everything a pipeline stage can store in a
//! frame cell: missing markers, flags, numbers, text and parsed dates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Frame cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
    /// Parsed date-time
    Date(NaiveDateTime),
}

impl Value {
    /// Build a number cell, storing NaN as `Null`
    pub fn number(n: f64) -> Self {
        if n.is_nan() {
            Value::Null
        } else {
            Value::Number(n)
        }
    }

    /// Build a number cell from an optional value
    pub fn from_option(n: Option<f64>) -> Self {
        n.map(Value::number).unwrap_or(Value::Null)
    }

    /// Build a 0/1 flag cell
    pub fn flag(set: bool) -> Self {
        Value::Number(if set { 1.0 } else { 0.0 })
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Whether this cell is missing (null or NaN)
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Numeric view of the cell; flags count as 0/1
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) if !n.is_nan() => Some(*n),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
        }
    }
}
