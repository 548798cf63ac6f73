//! Expected schema of the classifier input
//!
//! The schema is the exact ordered list of column names the classifier was
//! trained on. It fills engineered columns that a batch did not produce and
//! fixes the order of the emitted feature vector.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered column list the classifier expects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ExpectedSchema {
    columns: Arc<[String]>,
    index: HashMap<String, usize>,
}

impl ExpectedSchema {
    /// Create a schema, rejecting empty lists and duplicate names
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(CoreError::InvalidSchema(
                "schema has no columns".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (position, name) in columns.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CoreError::InvalidSchema(format!(
                    "blank column name at position {}",
                    position
                )));
            }
            if index.insert(name.clone(), position).is_some() {
                return Err(CoreError::InvalidSchema(format!(
                    "duplicate column '{}'",
                    name
                )));
            }
        }

        Ok(Self {
            columns: columns.into(),
            index,
        })
    }

    /// Column names in model order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Shared handle to the column names, used by feature vectors
    pub fn shared_columns(&self) -> Arc<[String]> {
        Arc::clone(&self.columns)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of a column in model order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

impl PartialEq for ExpectedSchema {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl TryFrom<Vec<String>> for ExpectedSchema {
    type Error = CoreError;

    fn try_from(columns: Vec<String>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<ExpectedSchema> for Vec<String> {
    fn from(schema: ExpectedSchema) -> Self {
        schema.columns.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_schema_order_and_lookup() {
        let schema = ExpectedSchema::new(names(&["Total_Charge", "RAF_Score", "COVID_era"])).unwrap();

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.position("RAF_Score"), Some(1));
        assert!(schema.contains("COVID_era"));
        assert!(!schema.contains("Year_Service"));
        assert_eq!(
            schema.iter().collect::<Vec<_>>(),
            vec!["Total_Charge", "RAF_Score", "COVID_era"]
        );
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let err = ExpectedSchema::new(names(&["RAF_Score", "RAF_Score"])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSchema(_)));
        assert!(err.to_string().contains("duplicate column 'RAF_Score'"));
    }

    #[test]
    fn test_schema_rejects_empty() {
        assert!(ExpectedSchema::new(Vec::new()).is_err());
        assert!(ExpectedSchema::new(names(&["a", " "])).is_err());
    }

    #[test]
    fn test_schema_serde_roundtrip_keeps_order() {
        let schema: ExpectedSchema =
            serde_json::from_str(r#"["post_COVID", "pre_COVID", "COVID_era"]"#).unwrap();
        assert_eq!(schema.columns()[0], "post_COVID");

        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(json, r#"["post_COVID","pre_COVID","COVID_era"]"#);
    }

    #[test]
    fn test_schema_deserialize_rejects_duplicates() {
        let result: std::result::Result<ExpectedSchema, _> =
            serde_json::from_str(r#"["a", "a"]"#);
        assert!(result.is_err());
    }
}
