//! Raw claim record as submitted by the claim form

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One insurance claim's submitted attributes, field name -> text.
///
/// Fields are kept exactly as submitted; the feature pipeline does all type
/// coercion. An empty or whitespace-only field reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawClaimRecord {
    fields: HashMap<String, String>,
}

/// Accepted JSON shapes for a single field
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Missing(()),
}

impl<'de> Deserialize<'de> for RawClaimRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, RawField> = HashMap::deserialize(deserializer)?;
        let fields = raw
            .into_iter()
            .filter_map(|(name, field)| match field {
                RawField::Text(s) => Some((name, s)),
                RawField::Integer(i) => Some((name, i.to_string())),
                RawField::Float(f) => Some((name, f.to_string())),
                RawField::Flag(b) => Some((name, if b { "True" } else { "False" }.to_string())),
                RawField::Missing(()) => None,
            })
            .collect();

        Ok(Self { fields })
    }
}

impl RawClaimRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder style)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a present field exactly as submitted; empty or whitespace-only
    /// fields read as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Submitted field names, in no particular order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<HashMap<String, String>> for RawClaimRecord {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawClaimRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_reads_as_absent() {
        let record = RawClaimRecord::new()
            .with_field("ICD10DiagCode_1", "E11.9")
            .with_field("ICD10DiagCode_2", "")
            .with_field("ICD10DiagCode_3", "   ");

        assert_eq!(record.get("ICD10DiagCode_1"), Some("E11.9"));
        assert_eq!(record.get("ICD10DiagCode_2"), None);
        assert_eq!(record.get("ICD10DiagCode_3"), None);
        assert_eq!(record.get("ICD10DiagCode_4"), None);
    }

    #[test]
    fn test_present_field_is_not_trimmed() {
        let record = RawClaimRecord::new().with_field("Appt_Type", " Lab Work ");
        assert_eq!(record.get("Appt_Type"), Some(" Lab Work "));
    }

    #[test]
    fn test_from_iterator() {
        let record: RawClaimRecord = [("Patient_Sex", "F"), ("Patient_Age", "67")]
            .into_iter()
            .collect();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("Patient_Age"), Some("67"));
    }

    #[test]
    fn test_deserialize_mixed_json_fields() {
        let json = r#"{
            "Procedure_Code": "99213",
            "Total_Charge": 150.5,
            "Patient_Age": 67,
            "RAF_Score": null
        }"#;

        let record: RawClaimRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.get("Procedure_Code"), Some("99213"));
        assert_eq!(record.get("Total_Charge"), Some("150.5"));
        assert_eq!(record.get("Patient_Age"), Some("67"));
        assert!(!record.contains("RAF_Score"));
    }
}
