//! Feature pipeline
//!
//! Turns a batch of raw claim records into numeric feature vectors laid out
//! exactly as the expected schema. The pipeline is a fixed sequence of
//! [`FeatureStage`]s over a [`ClaimFrame`]:
//!
//! 1. date features (year, month, weekday, delays, quarter, era flags)
//! 2. appointment type normalization
//! 3. diagnosis count and combination features
//! 4. median imputation
//! 5. binary and cyclical encodings
//! 6. drop-first one-hot expansion
//! 7. schema alignment
//! 8. numeric scaling
//! 9. intermediate column cleanup
//!
//! Every stage is deterministic. Stages that compute statistics (medians,
//! one-hot levels) compute them over the batch being transformed.

mod align;
mod categorical;
mod cleanup;
mod combos;
mod dates;
mod encoding;
mod impute;
mod one_hot;
mod scaling;

pub use align::SchemaAlignment;
pub use categorical::ApptTypeNormalizer;
pub use cleanup::IntermediateCleanup;
pub use combos::CombinationFeatures;
pub use dates::{delay_days, DateFeatures};
pub use encoding::{cyclical, encode_sex, CyclicalEncoder};
pub use impute::{median, MedianImputer};
pub use one_hot::OneHotEncoder;
pub use scaling::NumericScaling;

use crate::error::{Result, RuntimeError};
use crate::frame::ClaimFrame;
use crate::scaler::Scaler;
use claimscore_core::columns::{
    icd10_slots, procedure_icd10_combo, ICD10_SLOT_COUNT, INTERMEDIATE_COLUMNS, ONE_HOT_COLUMNS,
    PROCEDURE_CHARGE_PAIR, PROCEDURE_CODE, SCALED_COLUMNS,
};
use claimscore_core::{ExpectedSchema, FeatureVector, RawClaimRecord, Value};
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::sync::Arc;

/// One step of the feature pipeline
pub trait FeatureStage: Send + Sync + Debug {
    /// Stage name, used in logs
    fn name(&self) -> &'static str;

    /// Transform the frame in place
    fn apply(&self, frame: &mut ClaimFrame) -> Result<()>;
}

/// Raw claim records to aligned, scaled feature vectors
#[derive(Debug, Clone)]
pub struct FeaturePipeline {
    schema: Arc<ExpectedSchema>,
    scaler: Arc<dyn Scaler>,
    stages: Arc<[Box<dyn FeatureStage>]>,
}

impl FeaturePipeline {
    /// Build the pipeline for a schema and fitted scaler.
    ///
    /// Fails when the artifacts disagree: the scaler must cover exactly the
    /// scaled columns, the schema must contain all of them, and the schema
    /// must not name a column that is still text or already removed when
    /// the vector is produced.
    pub fn new(schema: Arc<ExpectedSchema>, scaler: Arc<dyn Scaler>) -> Result<Self> {
        validate_artifacts(&schema, scaler.as_ref())?;

        let stages: Vec<Box<dyn FeatureStage>> = vec![
            Box::new(DateFeatures),
            Box::new(ApptTypeNormalizer),
            Box::new(CombinationFeatures),
            Box::new(MedianImputer),
            Box::new(CyclicalEncoder),
            Box::new(OneHotEncoder::default()),
            Box::new(SchemaAlignment::new(schema.clone())),
            Box::new(NumericScaling::new(scaler.clone())),
            Box::new(IntermediateCleanup),
        ];

        tracing::debug!(
            "Feature pipeline ready: {} stages, {} output columns",
            stages.len(),
            schema.len()
        );

        Ok(Self {
            schema,
            scaler,
            stages: stages.into(),
        })
    }

    pub fn schema(&self) -> &ExpectedSchema {
        &self.schema
    }

    pub fn scaler(&self) -> &dyn Scaler {
        self.scaler.as_ref()
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over the batch and return the final frame
    pub fn engineer(&self, records: &[RawClaimRecord]) -> Result<ClaimFrame> {
        if records.is_empty() {
            return Err(RuntimeError::EmptyBatch);
        }

        let mut frame = ClaimFrame::from_records(records);
        for stage in self.stages.iter() {
            stage.apply(&mut frame)?;
            tracing::debug!(
                "Stage '{}' done: {} rows x {} columns",
                stage.name(),
                frame.n_rows(),
                frame.n_columns()
            );
        }
        Ok(frame)
    }

    /// Transform a batch into one feature vector per record, in input order
    pub fn transform(&self, records: &[RawClaimRecord]) -> Result<Vec<FeatureVector>> {
        let frame = self.engineer(records)?;
        let columns = self.schema.shared_columns();

        (0..frame.n_rows())
            .map(|row| {
                let values = columns
                    .iter()
                    .map(|name| feature_value(frame.cell(name, row), name, row))
                    .collect::<Result<Vec<f64>>>()?;
                Ok(FeatureVector::new(columns.clone(), values)?)
            })
            .collect()
    }

    /// Transform a single record
    pub fn transform_one(&self, record: &RawClaimRecord) -> Result<FeatureVector> {
        self.transform(std::slice::from_ref(record))?
            .pop()
            .ok_or(RuntimeError::EmptyBatch)
    }
}

/// Numeric value of an output cell.
///
/// Flags become 0/1 and missing cells become NaN. Text cannot reach the
/// model.
fn feature_value(cell: Option<&Value>, column: &str, row: usize) -> Result<f64> {
    match cell {
        None | Some(Value::Null) => Ok(f64::NAN),
        Some(Value::Number(n)) => Ok(*n),
        Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(other) => Err(RuntimeError::NonNumericFeature {
            column: column.to_string(),
            row,
            found: other.type_name(),
        }),
    }
}

fn validate_artifacts(schema: &ExpectedSchema, scaler: &dyn Scaler) -> Result<()> {
    let scaled: BTreeSet<&str> = SCALED_COLUMNS.into_iter().collect();
    let fitted: BTreeSet<&str> = scaler.columns().iter().map(String::as_str).collect();
    if fitted != scaled || scaler.columns().len() != SCALED_COLUMNS.len() {
        return Err(RuntimeError::InvalidPipeline(format!(
            "scaler columns {:?} do not match the scaled columns {:?}",
            scaler.columns(),
            SCALED_COLUMNS
        )));
    }

    if let Some(missing) = SCALED_COLUMNS.iter().find(|c| !schema.contains(c)) {
        return Err(RuntimeError::InvalidPipeline(format!(
            "schema is missing scaled column '{}'",
            missing
        )));
    }

    let mut excluded: Vec<String> = INTERMEDIATE_COLUMNS
        .iter()
        .chain(ONE_HOT_COLUMNS.iter())
        .chain([PROCEDURE_CODE, PROCEDURE_CHARGE_PAIR].iter())
        .map(|c| c.to_string())
        .collect();
    excluded.extend(icd10_slots());
    excluded.extend((1..=ICD10_SLOT_COUNT).map(procedure_icd10_combo));

    if let Some(column) = excluded.iter().find(|c| schema.contains(c)) {
        return Err(RuntimeError::InvalidPipeline(format!(
            "schema names non-numeric or intermediate column '{}'",
            column
        )));
    }

    Ok(())
}
