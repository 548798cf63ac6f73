//! Claim input and result output

use anyhow::Context;
use claimscore_core::RawClaimRecord;
use claimscore_sdk::{FeatureVector, ScoreResponse};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// A submitted claim form or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClaimInput {
    Many(Vec<RawClaimRecord>),
    One(RawClaimRecord),
}

/// Parse one claim object or an array of claim objects
pub fn parse_claims(content: &str) -> anyhow::Result<Vec<RawClaimRecord>> {
    let input: ClaimInput = serde_json::from_str(content)
        .context("expected a claim object or an array of claim objects")?;

    Ok(match input {
        ClaimInput::Many(records) => records,
        ClaimInput::One(record) => vec![record],
    })
}

/// Read claims from a file, or stdin when no path is given
pub fn read_claims(path: Option<&Path>) -> anyhow::Result<Vec<RawClaimRecord>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_claims(&content)
}

/// One line of scoring output
#[derive(Debug, Serialize)]
pub struct ScoreLine {
    pub index: usize,

    #[serde(flatten)]
    pub score: Option<ScoreResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One line of feature output
#[derive(Debug, Serialize)]
pub struct FeatureLine {
    pub index: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
