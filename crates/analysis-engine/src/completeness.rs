//! Field-completeness checking
//!
//! Tests each of the profile's field specs against the text and produces
//! the completeness score. Scoring is weighted 80/20 between required and
//! optional fields; profiles without optional fields use the plain
//! required-present ratio.

use regex::Regex;
use shared_types::{CompletenessStatus, FieldMatch};

use crate::profiles::{DocumentProfile, FieldSpec};

/// Field confidence levels; ad hoc, not probabilistically derived
const CONFIDENCE_WITH_VALUE: f32 = 0.9;
const CONFIDENCE_PRESENT: f32 = 0.7;

const REQUIRED_WEIGHT: f64 = 80.0;
const OPTIONAL_WEIGHT: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct CompletenessReport {
    pub score: u8,
    pub status: CompletenessStatus,
    pub fields: Vec<FieldMatch>,
}

pub fn check_completeness(text: &str, profile: &DocumentProfile) -> CompletenessReport {
    let mut fields = Vec::new();

    for spec in profile.required_fields {
        fields.push(check_field(text, spec, true));
    }
    for spec in profile.optional_fields {
        fields.push(check_field(text, spec, false));
    }

    let score = score_fields(&fields, profile);

    CompletenessReport {
        score,
        status: CompletenessStatus::from_score(score),
        fields,
    }
}

fn check_field(text: &str, spec: &FieldSpec, required: bool) -> FieldMatch {
    let present = spec
        .detect
        .iter()
        .any(|pattern| Regex::new(pattern).unwrap().is_match(text));

    let value = if present {
        spec.extract.and_then(|pattern| {
            Regex::new(pattern).unwrap().captures(text).map(|cap| {
                cap.get(1)
                    .map(|m| m.as_str())
                    .unwrap_or_else(|| cap.get(0).map(|m| m.as_str()).unwrap_or(""))
                    .trim()
                    .to_string()
            })
        })
    } else {
        None
    };

    let confidence = if !present {
        0.0
    } else if value.is_some() {
        CONFIDENCE_WITH_VALUE
    } else {
        CONFIDENCE_PRESENT
    };

    FieldMatch {
        name: spec.name.to_string(),
        label: spec.label.to_string(),
        required,
        present,
        value,
        confidence,
    }
}

fn score_fields(fields: &[FieldMatch], profile: &DocumentProfile) -> u8 {
    let required_total = profile.required_fields.len();
    if required_total == 0 {
        return 0;
    }

    let required_present = fields.iter().filter(|f| f.required && f.present).count();
    let required_ratio = required_present as f64 / required_total as f64;

    let optional_total = profile.optional_fields.len();
    let score = if optional_total == 0 {
        100.0 * required_ratio
    } else {
        let optional_present = fields.iter().filter(|f| !f.required && f.present).count();
        let optional_ratio = optional_present as f64 / optional_total as f64;
        REQUIRED_WEIGHT * required_ratio + OPTIONAL_WEIGHT * optional_ratio
    };

    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;
    use pretty_assertions::assert_eq;
    use shared_types::DocumentType;

    fn aps() -> &'static DocumentProfile {
        profiles::profile_for(DocumentType::PurchaseAgreement)
    }

    #[test]
    fn full_aps_text_scores_high() {
        let text = "Purchase Price: $750,000. Buyer: John Doe. Seller: Jane Smith. \
                    Property Address: 12 King St W, Toronto. Closing Date: June 30, 2024. \
                    A deposit of $37,500 is payable. This offer is conditional upon financing.";
        let report = check_completeness(text, aps());

        assert_eq!(report.score, 100);
        assert_eq!(report.status, CompletenessStatus::Complete);
    }

    #[test]
    fn required_only_scores_eighty() {
        // All three required present, no optional: 80 * 1.0 + 20 * 0.0
        let text = "Purchase Price: $750,000. Buyer: John Doe. Seller: Jane Smith.";
        let report = check_completeness(text, aps());

        assert_eq!(report.score, 80);
        assert_eq!(report.status, CompletenessStatus::MostlyComplete);
    }

    #[test]
    fn empty_text_scores_zero() {
        let report = check_completeness("", aps());
        assert_eq!(report.score, 0);
        assert_eq!(report.status, CompletenessStatus::Incomplete);
        assert!(report.fields.iter().all(|f| !f.present));
    }

    #[test]
    fn extracted_values_carry_higher_confidence() {
        let text = "Purchase Price: $750,000. The buyer shall inspect the premises.";
        let report = check_completeness(text, aps());

        let price = report
            .fields
            .iter()
            .find(|f| f.name == "purchase_price")
            .unwrap();
        assert!(price.present);
        assert_eq!(price.value.as_deref(), Some("$750,000"));
        assert_eq!(price.confidence, 0.9);

        let buyer = report.fields.iter().find(|f| f.name == "buyer").unwrap();
        assert!(buyer.present);
        assert_eq!(buyer.value, None);
        assert_eq!(buyer.confidence, 0.7);
    }

    #[test]
    fn profiles_without_optional_fields_use_plain_ratio() {
        static REQUIRED: [FieldSpec; 3] = [
            FieldSpec {
                name: "parties",
                label: "Parties",
                detect: &[r"(?i)\bparties\b"],
                extract: None,
            },
            FieldSpec {
                name: "date",
                label: "Date",
                detect: &[r"\d{4}-\d{2}-\d{2}"],
                extract: None,
            },
            FieldSpec {
                name: "signatures",
                label: "Signatures",
                detect: &[r"(?i)signature"],
                extract: None,
            },
        ];
        static PROFILE: DocumentProfile = DocumentProfile {
            doc_type: DocumentType::Generic,
            category: "General",
            jurisdiction: "ON",
            keywords: &[],
            phrases: &[],
            patterns: &[],
            filename_hints: &[],
            required_fields: &REQUIRED,
            optional_fields: &[],
            signature_roles: &[],
            max_age_days: None,
        };

        // Plain 100 * required ratio, rounded
        assert_eq!(check_completeness("The parties agree.", &PROFILE).score, 33);
        assert_eq!(
            check_completeness("The parties agree. Dated 2024-05-01.", &PROFILE).score,
            67
        );
        assert_eq!(
            check_completeness(
                "The parties agree. Dated 2024-05-01. Signature: ____",
                &PROFILE
            )
            .score,
            100
        );
    }

    #[test]
    fn score_is_monotone_in_required_matches() {
        let texts = [
            "nothing relevant",
            "Purchase Price: $750,000.",
            "Purchase Price: $750,000. Buyer: John Doe.",
            "Purchase Price: $750,000. Buyer: John Doe. Seller: Jane Smith.",
        ];

        let mut last = 0;
        for text in texts {
            let report = check_completeness(text, aps());
            assert!(report.score >= last, "score regressed at {:?}", text);
            last = report.score;
        }
    }
}
