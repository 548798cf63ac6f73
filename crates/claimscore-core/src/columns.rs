//! Column names of the claim feature space
//!
//! Raw field names match the submitted claim form; engineered names match the
//! columns the classifier was trained on.

// Raw claim fields
pub const APPT_DATE: &str = "Appt_Date";
pub const INITIAL_CLAIM_SUBMIT_DATE: &str = "Initial_Claim_Submit_Date";
pub const FINAL_CLAIM_SUBMIT_DATE: &str = "Final_Claim_Submit_Date";
pub const APPT_TYPE: &str = "Appt_Type";
pub const PROCEDURE_CODE: &str = "Procedure_Code";
pub const TOTAL_CHARGE: &str = "Total_Charge";
pub const PATIENT_SEX: &str = "Patient_Sex";
pub const PATIENT_AGE: &str = "Patient_Age";
pub const RAF_SCORE: &str = "RAF_Score";
pub const PRIMARY_INSURANCE_TYPE: &str = "Primary_Insurance_Type";
pub const SECONDARY_INSURANCE_TYPE: &str = "Secondary_Insurance_Type";

/// Number of diagnosis code slots on a claim
pub const ICD10_SLOT_COUNT: usize = 12;

// Derived date features
pub const YEAR_SERVICE: &str = "Year_Service";
pub const MONTH_SERVICE: &str = "Month_Service";
pub const DAY_OF_WEEK_SERVICE: &str = "Day_of_Week_Service";
pub const INITIAL_SUBMISSION_DELAY: &str = "Initial_Submission_Delay";
pub const FINAL_SUBMISSION_DELAY: &str = "Final_Submission_Delay";
pub const QUARTER_SERVICE: &str = "Quarter_Service";

// Era flags
pub const PRE_COVID: &str = "pre_COVID";
pub const COVID_ERA: &str = "COVID_era";
pub const POST_COVID: &str = "post_COVID";

// Combination features
pub const ICD10_CODE_COUNT: &str = "ICD10_Code_Count";
pub const PROCEDURE_CHARGE_PAIR: &str = "Procedure_Charge_Pair";

// Cyclical encodings
pub const MONTH_SERVICE_SIN: &str = "Month_Service_sin";
pub const MONTH_SERVICE_COS: &str = "Month_Service_cos";
pub const WEEKDAY_SERVICE_SIN: &str = "Weekday_Service_sin";
pub const WEEKDAY_SERVICE_COS: &str = "Weekday_Service_cos";

/// Literal used for absent categorical values
pub const NONE_LITERAL: &str = "None";

/// The three date fields parsed from the raw record
pub const DATE_COLUMNS: [&str; 3] = [APPT_DATE, INITIAL_CLAIM_SUBMIT_DATE, FINAL_CLAIM_SUBMIT_DATE];

/// Columns filled with the batch median when missing
pub const IMPUTED_COLUMNS: [&str; 3] = [RAF_SCORE, INITIAL_SUBMISSION_DELAY, FINAL_SUBMISSION_DELAY];

/// Categorical columns expanded into drop-first indicator columns
pub const ONE_HOT_COLUMNS: [&str; 4] = [
    PRIMARY_INSURANCE_TYPE,
    SECONDARY_INSURANCE_TYPE,
    APPT_TYPE,
    QUARTER_SERVICE,
];

/// Numeric columns passed through the fitted scaler, in scaler order
pub const SCALED_COLUMNS: [&str; 6] = [
    TOTAL_CHARGE,
    PATIENT_AGE,
    RAF_SCORE,
    INITIAL_SUBMISSION_DELAY,
    FINAL_SUBMISSION_DELAY,
    ICD10_CODE_COUNT,
];

/// Intermediate columns removed before the vector is emitted
pub const INTERMEDIATE_COLUMNS: [&str; 6] = [
    APPT_DATE,
    INITIAL_CLAIM_SUBMIT_DATE,
    FINAL_CLAIM_SUBMIT_DATE,
    YEAR_SERVICE,
    MONTH_SERVICE,
    DAY_OF_WEEK_SERVICE,
];

/// Name of diagnosis slot `i` (1-based)
pub fn icd10_slot(i: usize) -> String {
    format!("ICD10DiagCode_{}", i)
}

/// Name of the procedure/diagnosis combination feature for slot `i` (1-based)
pub fn procedure_icd10_combo(i: usize) -> String {
    format!("Procedure_ICD10_{}_Combo", i)
}

/// All diagnosis slot names in slot order
pub fn icd10_slots() -> Vec<String> {
    (1..=ICD10_SLOT_COUNT).map(icd10_slot).collect()
}

/// Name of the indicator column produced for `value` of categorical `column`
pub fn indicator(column: &str, value: &str) -> String {
    format!("{}_{}", column, value)
}
