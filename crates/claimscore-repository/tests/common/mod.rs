//! Shared fixtures for repository tests

use std::path::Path;
use tempfile::TempDir;
use tokio::fs;

pub const SCHEMA_JSON: &str = r#"[
  "Total_Charge", "Patient_Age", "RAF_Score",
  "Initial_Submission_Delay", "Final_Submission_Delay", "ICD10_Code_Count",
  "Patient_Sex", "COVID_era"
]"#;

pub const SCALER_JSON: &str = r#"{
  "kind": "standard",
  "columns": ["Total_Charge", "Patient_Age", "RAF_Score",
              "Initial_Submission_Delay", "Final_Submission_Delay", "ICD10_Code_Count"],
  "mean": [120.0, 60.0, 1.0, 7.0, 20.0, 2.0],
  "scale": [40.0, 12.0, 0.5, 3.0, 10.0, 1.5]
}"#;

pub const MODEL_JSON: &str = r#"{
  "kind": "logistic_regression",
  "feature_names": ["Total_Charge", "Patient_Age", "RAF_Score",
                    "Initial_Submission_Delay", "Final_Submission_Delay", "ICD10_Code_Count",
                    "Patient_Sex", "COVID_era"],
  "coefficients": [0.2, 0.1, -0.3, 0.5, 0.4, 0.05, 0.0, 0.3],
  "intercept": -0.7
}"#;

/// Write the standard artifact set into a fresh temp dir
pub async fn create_model_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "model.json", MODEL_JSON).await;
    write(temp_dir.path(), "scaler.json", SCALER_JSON).await;
    write(temp_dir.path(), "expected_columns.json", SCHEMA_JSON).await;
    temp_dir
}

pub async fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).await.unwrap();
}
