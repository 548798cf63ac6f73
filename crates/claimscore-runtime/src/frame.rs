//! Column frame the pipeline stages operate on
//!
//! A frame holds one batch of claim records column by column. Stages read
//! whole columns, derive new ones and write them back, so batch-level
//! statistics (medians, observed categories) see every record at once.

use crate::error::{Result, RuntimeError};
use claimscore_core::{RawClaimRecord, Value};
use std::collections::{BTreeSet, HashMap};

/// A named column of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

/// Columnar batch of claim records
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimFrame {
    rows: usize,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
}

impl ClaimFrame {
    /// Create an empty frame with a fixed number of rows
    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows,
            columns: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a frame from raw records.
    ///
    /// Columns are the union of submitted field names, in sorted order. Fields
    /// a record did not submit (or submitted empty) become `Null`.
    pub fn from_records(records: &[RawClaimRecord]) -> Self {
        let names: BTreeSet<&str> = records.iter().flat_map(|r| r.field_names()).collect();

        let mut frame = Self::with_rows(records.len());
        for name in names {
            let values = records
                .iter()
                .map(|r| r.get(name).map(Value::text).unwrap_or(Value::Null))
                .collect();
            frame.push(name.to_string(), values);
        }
        frame
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Cells of a column
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].values.as_slice())
    }

    /// Cells of a column, or all-`Null` when the column is absent
    pub fn column_or_null(&self, name: &str) -> Vec<Value> {
        self.column(name)
            .map(<[Value]>::to_vec)
            .unwrap_or_else(|| vec![Value::Null; self.rows])
    }

    /// Single cell lookup
    pub fn cell(&self, name: &str, row: usize) -> Option<&Value> {
        self.column(name).and_then(|values| values.get(row))
    }

    /// Insert a column, or replace it in place if it already exists
    pub fn set_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let name = name.into();
        if values.len() != self.rows {
            return Err(RuntimeError::ColumnLength {
                column: name,
                expected: self.rows,
                actual: values.len(),
            });
        }

        match self.index.get(&name) {
            Some(&i) => self.columns[i].values = values,
            None => self.push(name, values),
        }
        Ok(())
    }

    /// Remove a column, returning its cells
    pub fn remove_column(&mut self, name: &str) -> Option<Vec<Value>> {
        let position = self.index.remove(name)?;
        let column = self.columns.remove(position);
        for i in self.index.values_mut() {
            if *i > position {
                *i -= 1;
            }
        }
        Some(column.values)
    }

    /// Project onto an ordered column list.
    ///
    /// Listed columns keep their cells; listed columns the frame lacks are
    /// filled with `fill`; unlisted columns are discarded.
    pub fn project(mut self, names: &[String], fill: Value) -> Self {
        let mut projected = Self::with_rows(self.rows);
        for name in names {
            let values = self
                .remove_column(name)
                .unwrap_or_else(|| vec![fill.clone(); self.rows]);
            projected.push(name.clone(), values);
        }
        projected
    }

    fn push(&mut self, name: String, values: Vec<Value>) {
        self.index.insert(name.clone(), self.columns.len());
        self.columns.push(Column { name, values });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RawClaimRecord> {
        vec![
            RawClaimRecord::new()
                .with_field("Patient_Sex", "F")
                .with_field("RAF_Score", "1.2"),
            RawClaimRecord::new()
                .with_field("Patient_Sex", "M")
                .with_field("Procedure_Code", "99213"),
        ]
    }

    #[test]
    fn test_from_records_unions_fields() {
        let frame = ClaimFrame::from_records(&records());

        assert_eq!(frame.n_rows(), 2);
        assert_eq!(
            frame.column_names().collect::<Vec<_>>(),
            vec!["Patient_Sex", "Procedure_Code", "RAF_Score"]
        );
        assert_eq!(
            frame.column("RAF_Score").unwrap(),
            &[Value::text("1.2"), Value::Null]
        );
        assert_eq!(frame.cell("Procedure_Code", 1), Some(&Value::text("99213")));
    }

    #[test]
    fn test_column_or_null_for_absent_column() {
        let frame = ClaimFrame::from_records(&records());
        assert_eq!(frame.column_or_null("Appt_Date"), vec![Value::Null, Value::Null]);
    }

    #[test]
    fn test_set_column_checks_height() {
        let mut frame = ClaimFrame::with_rows(2);
        let err = frame
            .set_column("COVID_era", vec![Value::flag(true)])
            .unwrap_err();
        assert!(matches!(err, RuntimeError::ColumnLength { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn test_set_column_replaces_in_place() {
        let mut frame = ClaimFrame::from_records(&records());
        frame
            .set_column("Patient_Sex", vec![Value::Number(1.0), Value::Number(0.0)])
            .unwrap();

        assert_eq!(frame.n_columns(), 3);
        assert_eq!(frame.column_names().next(), Some("Patient_Sex"));
        assert_eq!(frame.cell("Patient_Sex", 0), Some(&Value::Number(1.0)));
    }

    #[test]
    fn test_remove_column_keeps_index_consistent() {
        let mut frame = ClaimFrame::from_records(&records());
        assert!(frame.remove_column("Patient_Sex").is_some());
        assert!(frame.remove_column("Patient_Sex").is_none());

        assert_eq!(frame.cell("RAF_Score", 0), Some(&Value::text("1.2")));
        assert_eq!(frame.cell("Procedure_Code", 1), Some(&Value::text("99213")));
    }

    #[test]
    fn test_project_fills_and_discards() {
        let frame = ClaimFrame::from_records(&records());
        let names = vec!["RAF_Score".to_string(), "COVID_era".to_string()];
        let projected = frame.project(&names, Value::Number(0.0));

        assert_eq!(
            projected.column_names().collect::<Vec<_>>(),
            vec!["RAF_Score", "COVID_era"]
        );
        assert_eq!(
            projected.column("COVID_era").unwrap(),
            &[Value::Number(0.0), Value::Number(0.0)]
        );
        assert!(!projected.contains("Patient_Sex"));
    }
}
