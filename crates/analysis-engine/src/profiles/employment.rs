//! Employment contract profile
//!
//! Type-specific rule: probationary periods over three months are flagged.

use crate::extractors::extract_months_near;
use crate::patterns::extract_snippet;
use shared_types::{DocumentType, Issue, Severity};

use super::{DocumentProfile, FieldSpec};

/// Longest probationary period the heuristic accepts, in months
pub const MAX_PROBATION_MONTHS: u32 = 3;

pub static PROFILE: DocumentProfile = DocumentProfile {
    doc_type: DocumentType::Employment,
    category: "Employment",
    jurisdiction: "ON",
    keywords: &[
        "employment",
        "employee",
        "employer",
        "salary",
        "probation",
        "vacation",
        "duties",
    ],
    phrases: &[
        "employment agreement",
        "employment contract",
        "annual salary",
        "termination of employment",
        "notice of termination",
    ],
    patterns: &[r"(?i)salary\s+of\s+\$", r"(?i)reports?\s+to\s+the"],
    filename_hints: &["employment", "offer-letter", "offer_letter"],
    required_fields: &[
        FieldSpec {
            name: "employer",
            label: "Employer",
            detect: &[r"(?i)\bemployer\b", r"(?i)\bcompany\b"],
            extract: Some(r"(?i)employer\s*:\s*([A-Z][A-Za-z .,'\-]{1,60})"),
        },
        FieldSpec {
            name: "employee",
            label: "Employee",
            detect: &[r"(?i)\bemployee\b"],
            extract: Some(r"(?i)employee\s*:\s*([A-Z][A-Za-z .'\-]{1,60})"),
        },
        FieldSpec {
            name: "salary",
            label: "Salary",
            detect: &[r"(?i)\bsalary\b", r"(?i)\bwage\b", r"(?i)\bcompensation\b"],
            extract: Some(r"(?i)salary\s+of\s+(\$?\s?\d[\d,]*(?:\.\d{2})?)"),
        },
        FieldSpec {
            name: "position",
            label: "Position",
            detect: &[r"(?i)\bposition\b", r"(?i)\btitle\b", r"(?i)employed\s+as"],
            extract: Some(r"(?i)position\s*(?:of|:)\s*([A-Za-z][A-Za-z /&'\-]{1,60})"),
        },
    ],
    optional_fields: &[
        FieldSpec {
            name: "start_date",
            label: "Start Date",
            detect: &[r"(?i)start\s+date", r"(?i)commenc\w+\s+employment"],
            extract: Some(r"(?i)start\s+date\s*:?\s*([^\n]{4,40})"),
        },
        FieldSpec {
            name: "probation_period",
            label: "Probationary Period",
            detect: &[r"(?i)probation"],
            extract: Some(r"(?i)(\d+[\s-]*months?)\s+probation"),
        },
        FieldSpec {
            name: "benefits",
            label: "Benefits",
            detect: &[r"(?i)\bbenefits\b", r"(?i)health\s+plan", r"(?i)\bpension\b"],
            extract: None,
        },
        FieldSpec {
            name: "termination_notice",
            label: "Termination Notice",
            detect: &[r"(?i)notice\s+of\s+termination", r"(?i)terminat\w+\s+.{0,30}notice"],
            extract: None,
        },
    ],
    signature_roles: &["employer", "employee"],
    max_age_days: None,
};

/// Probationary periods longer than MAX_PROBATION_MONTHS are flagged
pub fn check_probation_period(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(months) = extract_months_near(text, &["probation"]) {
        if months > MAX_PROBATION_MONTHS {
            issues.push(Issue {
                rule: "probation.maximum".to_string(),
                severity: Severity::Warning,
                message: format!(
                    "Probationary period of {} months exceeds the customary {}-month maximum",
                    months, MAX_PROBATION_MONTHS
                ),
                text_snippet: Some(extract_snippet(text, "probation")),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_long_probation() {
        let text = "The Employee is subject to a 6-month probationary period.";
        assert!(check_probation_period(text)
            .iter()
            .any(|i| i.rule == "probation.maximum"));
    }

    #[test]
    fn accepts_standard_probation() {
        let text = "The Employee is subject to a 3-month probationary period.";
        assert!(check_probation_period(text).is_empty());
    }
}
