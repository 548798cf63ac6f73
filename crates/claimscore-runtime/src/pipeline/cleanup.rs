//! Removal of intermediate columns

use super::FeatureStage;
use crate::error::Result;
use crate::frame::ClaimFrame;
use claimscore_core::columns::INTERMEDIATE_COLUMNS;

/// Drops the raw dates and their year/month/weekday intermediates.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntermediateCleanup;

impl FeatureStage for IntermediateCleanup {
    fn name(&self) -> &'static str {
        "intermediate_cleanup"
    }

    fn apply(&self, frame: &mut ClaimFrame) -> Result<()> {
        for column in INTERMEDIATE_COLUMNS {
            frame.remove_column(column);
        }
        Ok(())
    }
}
