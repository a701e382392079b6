//! Non-disclosure agreement profile

use shared_types::DocumentType;

use super::{DocumentProfile, FieldSpec};

pub static PROFILE: DocumentProfile = DocumentProfile {
    doc_type: DocumentType::Nda,
    category: "Commercial",
    jurisdiction: "ON",
    keywords: &[
        "confidential",
        "disclosure",
        "proprietary",
        "recipient",
        "discloser",
    ],
    phrases: &[
        "non-disclosure agreement",
        "confidentiality agreement",
        "confidential information",
        "trade secrets",
    ],
    patterns: &[r"(?i)non[\s-]?disclosure", r"(?i)shall\s+(?:keep|hold)\s+.{0,30}confiden"],
    filename_hints: &["nda", "confidentiality", "non-disclosure"],
    required_fields: &[
        FieldSpec {
            name: "disclosing_party",
            label: "Disclosing Party",
            detect: &[r"(?i)disclosing\s+party", r"(?i)\bdiscloser\b"],
            extract: Some(r"(?i)disclosing\s+party\s*:\s*([A-Z][A-Za-z .,'\-]{1,60})"),
        },
        FieldSpec {
            name: "receiving_party",
            label: "Receiving Party",
            detect: &[r"(?i)receiving\s+party", r"(?i)\brecipient\b"],
            extract: Some(r"(?i)receiving\s+party\s*:\s*([A-Z][A-Za-z .,'\-]{1,60})"),
        },
        FieldSpec {
            name: "confidential_information",
            label: "Definition of Confidential Information",
            detect: &[
                r#"(?i)["\u{201c}]?confidential\s+information["\u{201d}]?\s+(?:means|includes|shall\s+mean)"#,
                r"(?i)definition\s+of\s+confidential",
            ],
            extract: None,
        },
    ],
    optional_fields: &[
        FieldSpec {
            name: "term",
            label: "Term",
            detect: &[r"(?i)term\s+of\s+\d+\s+years?", r"(?i)period\s+of\s+\d+\s+years?"],
            extract: Some(r"(?i)(?:term|period)\s+of\s+(\d+\s+years?)"),
        },
        FieldSpec {
            name: "governing_law",
            label: "Governing Law",
            detect: &[r"(?i)governing\s+law", r"(?i)governed\s+by\s+the\s+laws"],
            extract: None,
        },
        FieldSpec {
            name: "effective_date",
            label: "Effective Date",
            detect: &[r"(?i)effective\s+(?:date|as\s+of)"],
            extract: Some(r"(?i)effective\s+date\s*:?\s*([^\n]{4,40})"),
        },
    ],
    signature_roles: &["disclosing party", "receiving party"],
    max_age_days: Some(1825),
};
