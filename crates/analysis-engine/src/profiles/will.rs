//! Last will and testament profile
//!
//! Type-specific rule: wills are expected to carry two witness signatures.

use crate::patterns::extract_snippet;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{DocumentType, Issue, Severity};

use super::{DocumentProfile, FieldSpec};

/// Witness signatures a formally executed will requires
pub const REQUIRED_WITNESSES: usize = 2;

pub static PROFILE: DocumentProfile = DocumentProfile {
    doc_type: DocumentType::Will,
    category: "Estates",
    jurisdiction: "ON",
    keywords: &[
        "testament",
        "testator",
        "executor",
        "bequeath",
        "estate",
        "beneficiary",
        "codicil",
    ],
    phrases: &[
        "last will and testament",
        "sound mind",
        "residue of my estate",
        "revoke all former wills",
    ],
    patterns: &[r"(?i)i\s+(?:hereby\s+)?(?:give|devise|bequeath)", r"(?i)appoint\s+.{0,40}executor"],
    filename_hints: &["will", "testament", "codicil"],
    required_fields: &[
        FieldSpec {
            name: "testator",
            label: "Testator",
            detect: &[r"(?i)\btestator\b", r"(?i)last\s+will\s+.{0,20}\bof\b"],
            extract: Some(r"(?i)last\s+will\s+and\s+testament\s+of\s+([A-Z][A-Za-z .'\-]{1,60})"),
        },
        FieldSpec {
            name: "executor",
            label: "Executor",
            detect: &[r"(?i)\bexecutor\b", r"(?i)\bexecutrix\b", r"(?i)estate\s+trustee"],
            extract: Some(r"(?i)appoint\s+([A-Z][A-Za-z .'\-]{1,60}?)\s+(?:as|to\s+be)\s+.{0,20}(?:executor|estate\s+trustee)"),
        },
        FieldSpec {
            name: "beneficiaries",
            label: "Beneficiaries",
            detect: &[r"(?i)\bbeneficiar", r"(?i)(?:give|devise|bequeath)\s+to"],
            extract: None,
        },
    ],
    optional_fields: &[
        FieldSpec {
            name: "guardian",
            label: "Guardian",
            detect: &[r"(?i)\bguardian\b"],
            extract: None,
        },
        FieldSpec {
            name: "residuary_clause",
            label: "Residuary Clause",
            detect: &[r"(?i)residue\s+of\s+.{0,20}estate", r"(?i)residuary"],
            extract: None,
        },
        FieldSpec {
            name: "execution_date",
            label: "Execution Date",
            detect: &[r"(?i)dated\s+this", r"(?i)signed\s+.{0,20}\bday\s+of\b"],
            extract: None,
        },
    ],
    signature_roles: &["testator"],
    max_age_days: None,
};

lazy_static! {
    static ref WITNESS_SIGNATURE_RE: Regex =
        Regex::new(r"(?i)witness[^\n]{0,40}(?:signature|signed)|(?:signature|signed)[^\n]{0,40}witness").unwrap();
}

/// A will without two witness signature blocks is flagged
pub fn check_witnesses(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let count = WITNESS_SIGNATURE_RE.find_iter(text).count();

    if count < REQUIRED_WITNESSES {
        issues.push(Issue {
            rule: "witness.count".to_string(),
            severity: Severity::Warning,
            message: format!(
                "Found {} witness signature block(s); a formally executed will requires {}",
                count, REQUIRED_WITNESSES
            ),
            text_snippet: Some(extract_snippet(text, "witness")),
        });
    }

    issues
}
