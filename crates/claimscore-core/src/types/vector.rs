//! Engineered feature vector handed to the classifier

use crate::error::{CoreError, Result};
use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;
use std::sync::Arc;

/// Fixed-width numeric vector whose names and order equal the expected schema.
///
/// Missing numeric features (for example an unrecognised `Patient_Sex`) are
/// carried as `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Arc<[String]>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Create a vector over shared column names
    pub fn new(columns: Arc<[String]>, values: Vec<f64>) -> Result<Self> {
        if columns.len() != values.len() {
            return Err(CoreError::LengthMismatch {
                expected: columns.len(),
                actual: values.len(),
            });
        }
        Ok(Self { columns, values })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named feature
    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i])
    }

    /// (name, value) pairs in model order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

// Serialized as an ordered name -> value map; NaN becomes null.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            if value.is_finite() {
                map.serialize_entry(name, &value)?;
            } else {
                map.serialize_entry(name, &Option::<f64>::None)?;
            }
        }
        map.end()
    }
}
