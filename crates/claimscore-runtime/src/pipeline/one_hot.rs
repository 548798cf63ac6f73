//! Drop-first one-hot expansion of categorical columns

use super::FeatureStage;
use crate::coerce::cell_text;
use crate::error::Result;
use crate::frame::ClaimFrame;
use claimscore_core::columns::{indicator, ONE_HOT_COLUMNS};
use claimscore_core::Value;
use std::collections::BTreeSet;

/// Replaces each categorical column with one indicator column per observed
/// value, minus the lexically first value, which serves as the reference.
///
/// Levels come from the batch, so a batch of one produces no indicators at
/// all; schema alignment then fills every indicator the model knows with 0.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    columns: Vec<String>,
}

impl OneHotEncoder {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl Default for OneHotEncoder {
    fn default() -> Self {
        Self::new(ONE_HOT_COLUMNS.iter().map(|c| c.to_string()).collect())
    }
}

impl FeatureStage for OneHotEncoder {
    fn name(&self) -> &'static str {
        "one_hot_encoding"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        for column in &self.columns {
            let Some(values) = frame.remove_column(column) else {
                continue;
            };

            let labels: Vec<Option<String>> = values
                .iter()
                .map(|v| (!v.is_null()).then(|| cell_text(v)))
                .collect();
            let levels: BTreeSet<&str> = labels.iter().flatten().map(String::as_str).collect();

            for level in levels.into_iter().skip(1) {
                let indicators = labels
                    .iter()
                    .map(|label| Value::flag(label.as_deref() == Some(level)))
                    .collect();
                frame.set_column(indicator(column, level), indicators)?;
            }
        }

        Ok(())
    }
}
