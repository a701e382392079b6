//! Generic fallback profile used when no specific type is recognized

use shared_types::DocumentType;

use super::{DocumentProfile, FieldSpec};

pub static PROFILE: DocumentProfile = DocumentProfile {
    doc_type: DocumentType::Generic,
    category: "General",
    jurisdiction: "ON",
    // Never scored by the classifier; reached only as a fallback
    keywords: &[],
    phrases: &[],
    patterns: &[],
    filename_hints: &[],
    required_fields: &[
        FieldSpec {
            name: "parties",
            label: "Parties",
            detect: &[r"(?i)\bbetween\b.{0,80}\band\b", r"(?i)\bparties\b"],
            extract: None,
        },
        FieldSpec {
            name: "date",
            label: "Date",
            detect: &[
                r"\d{4}-\d{2}-\d{2}",
                r"\d{1,2}/\d{1,2}/\d{4}",
                r"(?i)(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{4}",
            ],
            extract: None,
        },
    ],
    optional_fields: &[
        FieldSpec {
            name: "governing_law",
            label: "Governing Law",
            detect: &[r"(?i)governing\s+law", r"(?i)governed\s+by\s+the\s+laws"],
            extract: None,
        },
        FieldSpec {
            name: "signatures",
            label: "Signatures",
            detect: &[r"(?i)signature", r"(?i)signed\s+by", r"(?i)\[signed\]"],
            extract: None,
        },
    ],
    signature_roles: &[],
    max_age_days: None,
};
