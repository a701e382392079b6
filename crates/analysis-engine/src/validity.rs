//! Heuristic validity scoring
//!
//! Starts at 100 and deducts fixed penalties for missing signatures, date
//! problems, and the profile's type-specific checks, then clamps to
//! [0, 100] and buckets the result. Suggested actions are derived from
//! the recorded issues and absent required fields.

use chrono::NaiveDate;
use shared_types::{FieldMatch, Issue, Severity, ValidityStatus};

use crate::extractors::{document_age_days, extract_first_date};
use crate::patterns::has_role_signature;
use crate::profiles::{self, DocumentProfile};

const MISSING_SIGNATURE_PENALTY: i32 = 20;
const MISSING_DATE_PENALTY: i32 = 10;
const STALE_DATE_PENALTY: i32 = 25;

#[derive(Debug, Clone)]
pub struct ValidityReport {
    pub score: u8,
    pub status: ValidityStatus,
    pub issues: Vec<Issue>,
}

pub fn check_validity(text: &str, profile: &DocumentProfile, today: NaiveDate) -> ValidityReport {
    let mut issues = Vec::new();
    let mut penalty: i32 = 0;

    // Signature presence per required role
    for role in profile.signature_roles {
        if !has_role_signature(text, role) {
            penalty += MISSING_SIGNATURE_PENALTY;
            issues.push(Issue {
                rule: format!("signature.{}", role.replace(' ', "_")),
                severity: Severity::Critical,
                message: format!("No {} signature was detected", role),
                text_snippet: None,
            });
        }
    }

    // Date presence and age
    match extract_first_date(text) {
        None => {
            penalty += MISSING_DATE_PENALTY;
            issues.push(Issue {
                rule: "date.missing".to_string(),
                severity: Severity::Warning,
                message: "No execution or effective date was detected".to_string(),
                text_snippet: None,
            });
        }
        Some(date) => {
            if let (Some(max_age), Some(age)) =
                (profile.max_age_days, document_age_days(text, today))
            {
                if age > max_age {
                    penalty += STALE_DATE_PENALTY;
                    issues.push(Issue {
                        rule: "date.stale".to_string(),
                        severity: Severity::Critical,
                        message: format!(
                            "Document is dated {} ({} days old, limit {} days)",
                            date, age, max_age
                        ),
                        text_snippet: None,
                    });
                }
            }
        }
    }

    // Type-specific checks, penalized by severity
    for issue in profiles::extra_checks(profile.doc_type, text) {
        penalty += match issue.severity {
            Severity::Critical => 20,
            Severity::Warning => 10,
            Severity::Info => 0,
        };
        issues.push(issue);
    }

    let score = (100 - penalty).clamp(0, 100) as u8;

    ValidityReport {
        score,
        status: ValidityStatus::from_score(score, !issues.is_empty()),
        issues,
    }
}

/// Actionable follow-ups derived from absent required fields and issues
pub fn suggested_actions(fields: &[FieldMatch], issues: &[Issue]) -> Vec<String> {
    let mut actions = Vec::new();

    for field in fields.iter().filter(|f| f.required && !f.present) {
        actions.push(format!("Add the missing {} clause", field.label));
    }

    for issue in issues {
        if let Some(role) = issue.rule.strip_prefix("signature.") {
            actions.push(format!("Obtain the {} signature", role.replace('_', " ")));
        } else if issue.rule == "date.missing" {
            actions.push("Add an execution date".to_string());
        } else if issue.rule == "date.stale" {
            actions.push("Re-execute the document with a current date".to_string());
        } else {
            actions.push(format!("Review: {}", issue.message));
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;
    use proptest::prelude::*;
    use shared_types::DocumentType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn aps() -> &'static DocumentProfile {
        profiles::profile_for(DocumentType::PurchaseAgreement)
    }

    #[test]
    fn signed_recent_aps_is_valid() {
        let text = "Dated 2024-05-01. Purchase Price: $750,000. \
                    Buyer Signature: [Signed]. Seller Signature: [Signed].";
        let report = check_validity(text, aps(), today());

        assert_eq!(report.score, 100);
        assert_eq!(report.status, ValidityStatus::Valid);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn missing_signatures_are_critical() {
        let text = "Dated 2024-05-01. Purchase Price: $750,000.";
        let report = check_validity(text, aps(), today());

        assert_eq!(report.score, 60); // two missing signatures
        assert_eq!(report.status, ValidityStatus::PotentiallyInvalid);
        assert_eq!(
            report
                .issues
                .iter()
                .filter(|i| i.severity == Severity::Critical)
                .count(),
            2
        );
    }

    #[test]
    fn undated_document_gets_warning() {
        let text = "Buyer Signature: [Signed]. Seller Signature: [Signed].";
        let report = check_validity(text, aps(), today());

        assert_eq!(report.score, 90);
        assert_eq!(report.status, ValidityStatus::ValidWithIssues);
        assert!(report.issues.iter().any(|i| i.rule == "date.missing"));
    }

    #[test]
    fn stale_document_is_flagged() {
        let text = "Dated 2021-01-15. Buyer Signature: [Signed]. Seller Signature: [Signed].";
        let report = check_validity(text, aps(), today());

        assert_eq!(report.score, 75);
        assert!(report.issues.iter().any(|i| i.rule == "date.stale"));
    }

    #[test]
    fn actions_cover_missing_fields_and_signatures() {
        let fields = vec![FieldMatch {
            name: "purchase_price".to_string(),
            label: "Purchase Price".to_string(),
            required: true,
            present: false,
            value: None,
            confidence: 0.0,
        }];
        let issues = vec![Issue {
            rule: "signature.buyer".to_string(),
            severity: Severity::Critical,
            message: "No buyer signature was detected".to_string(),
            text_snippet: None,
        }];

        let actions = suggested_actions(&fields, &issues);
        assert!(actions.iter().any(|a| a.contains("Purchase Price")));
        assert!(actions.iter().any(|a| a.contains("buyer signature")));
    }

    proptest! {
        // Score stays clamped no matter how many penalties accumulate
        #[test]
        fn score_is_always_in_range(text in ".{0,400}") {
            for doc_type in [
                DocumentType::PurchaseAgreement,
                DocumentType::Lease,
                DocumentType::Nda,
                DocumentType::Employment,
                DocumentType::Will,
                DocumentType::Generic,
            ] {
                let profile = profiles::profile_for(doc_type);
                let report = check_validity(&text, profile, today());
                prop_assert!(report.score <= 100);
            }
        }
    }
}
