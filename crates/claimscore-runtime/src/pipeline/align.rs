//! Projection onto the expected schema

use super::FeatureStage;
use crate::error::Result;
use crate::frame::ClaimFrame;
use claimscore_core::{ExpectedSchema, Value};
use std::sync::Arc;

/// Reindexes the frame to the expected schema: schema columns the batch did
/// not produce are added as 0, columns the schema does not name are dropped.
#[derive(Debug, Clone)]
pub struct SchemaAlignment {
    schema: Arc<ExpectedSchema>,
}

impl SchemaAlignment {
    pub fn new(schema: Arc<ExpectedSchema>) -> Self {
        Self { schema }
    }
}

impl FeatureStage for SchemaAlignment {
    fn name(&self) -> &'static str {
        "schema_alignment"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        let rows = frame.n_rows();
        let engineered = std::mem::replace(frame, ClaimFrame::with_rows(rows));

        let dropped = engineered
            .column_names()
            .filter(|name| !self.schema.contains(name))
            .count();
        let filled = self
            .schema
            .iter()
            .filter(|name| !engineered.contains(name))
            .count();
        tracing::debug!(
            "Aligning {} engineered columns to schema: {} dropped, {} filled with 0",
            engineered.n_columns(),
            dropped,
            filled
        );

        *frame = engineered.project(self.schema.columns(), Value::Number(0.0));
        Ok(())
    }
}
