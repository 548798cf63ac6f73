//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use claimscore_sdk::{ArtifactBundle, ExpectedSchema, ModelArtifact, RawClaimRecord, ScalerArtifact};
use std::path::Path;
use tempfile::TempDir;

pub const SCALED: [&str; 6] = [
    "Total_Charge",
    "Patient_Age",
    "RAF_Score",
    "Initial_Submission_Delay",
    "Final_Submission_Delay",
    "ICD10_Code_Count",
];

/// Expected columns of the fixture model
pub fn feature_names() -> Vec<String> {
    SCALED
        .iter()
        .copied()
        .chain([
            "Patient_Sex",
            "pre_COVID",
            "COVID_era",
            "post_COVID",
            "Month_Service_sin",
            "Month_Service_cos",
            "Weekday_Service_sin",
            "Weekday_Service_cos",
            "Appt_Type_Other",
        ])
        .map(String::from)
        .collect()
}

/// Model whose only signal is the COVID era flag: p = sigmoid(covid - 1)
pub fn model() -> ModelArtifact {
    let names = feature_names();
    let mut coefficients = vec![0.0; names.len()];
    let covid = names.iter().position(|c| c == "COVID_era").unwrap();
    coefficients[covid] = 1.0;

    ModelArtifact::LogisticRegression {
        feature_names: names,
        coefficients,
        intercept: -1.0,
    }
}

pub fn scaler() -> ScalerArtifact {
    ScalerArtifact::Standard {
        columns: SCALED.iter().map(|c| c.to_string()).collect(),
        mean: vec![120.0, 60.0, 1.0, 7.0, 20.0, 2.0],
        scale: vec![40.0, 12.0, 0.5, 3.0, 10.0, 1.5],
    }
}

pub fn bundle() -> ArtifactBundle {
    ArtifactBundle {
        model: model(),
        scaler: scaler(),
        schema: ExpectedSchema::new(feature_names()).unwrap(),
    }
}

/// Write the fixture artifacts as JSON into a fresh temp dir
pub fn create_model_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "model.json", &model());
    write_json(dir.path(), "scaler.json", &scaler());
    write_json(dir.path(), "expected_columns.json", &feature_names());
    dir
}

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, value: &T) {
    std::fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// A claim serviced during the COVID era
pub fn covid_era_claim() -> RawClaimRecord {
    RawClaimRecord::new()
        .with_field("Appt_Date", "2021-06-15")
        .with_field("Initial_Claim_Submit_Date", "2021-06-20")
        .with_field("Final_Claim_Submit_Date", "2021-07-01")
        .with_field("Appt_Type", "Lab Work")
        .with_field("Procedure_Code", "99213")
        .with_field("Total_Charge", "150")
        .with_field("Patient_Sex", "F")
        .with_field("Patient_Age", "67")
        .with_field("RAF_Score", "1.2")
        .with_field("Primary_Insurance_Type", "Medicare")
        .with_field("ICD10DiagCode_1", "E11.9")
        .with_field("ICD10DiagCode_2", "I10")
}

/// A claim serviced after the COVID era
pub fn post_covid_claim() -> RawClaimRecord {
    covid_era_claim()
        .with_field("Appt_Date", "2024-03-04")
        .with_field("Initial_Claim_Submit_Date", "2024-03-08")
        .with_field("Final_Claim_Submit_Date", "2024-03-20")
}
