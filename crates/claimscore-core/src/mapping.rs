//! Fixed lookup tables of the feature space
//!
//! The appointment type table collapses the scheduling system's labels into
//! the coarse buckets the classifier was trained on. Labels not listed pass
//! through unchanged.

/// Appointment type label -> coarse bucket
pub const APPT_TYPE_MAPPING: [(&str, &str); 14] = [
    ("ANY 20", "Follow Up"),
    ("Established Patient", "Follow Up"),
    ("Medicare Annual Wellness", "Annual Visit"),
    ("Procedure (cash)", "Other"),
    ("Hormone Replacement", "Other"),
    ("Lab Work", "Other"),
    ("Biofeedback Therapy", "Other"),
    ("functional medicine consult", "Other"),
    ("COGNITIVE CONSULTATION", "Other"),
    ("VACCINATION", "Other"),
    ("hair removal", "Other"),
    ("cosmetic treatments", "Other"),
    ("Preliminary Consultation", "Other"),
    ("Membership visit", "Other"),
];

/// Map an appointment type label to its bucket, passing unknown labels through.
///
/// Matching is exact: `"Lab work"` is not `"Lab Work"`.
pub fn map_appt_type(label: &str) -> &str {
    APPT_TYPE_MAPPING
        .iter()
        .find(|(raw, _)| *raw == label)
        .map(|(_, bucket)| *bucket)
        .unwrap_or(label)
}

/// Fiscal quarter label for a calendar month (1-12)
pub fn fiscal_quarter(month: u32) -> Option<&'static str> {
    match month {
        1..=3 => Some("Q1"),
        4..=6 => Some("Q2"),
        7..=9 => Some("Q3"),
        10..=12 => Some("Q4"),
        _ => None,
    }
}
