//! Residential lease profile
//!
//! Type-specific rule: a deposit return period over 30 days is flagged,
//! the longest period the heuristic accepts for any deposit claim.

use crate::extractors::extract_days_near;
use crate::patterns::extract_snippet;
use shared_types::{DocumentType, Issue, Severity};

use super::{DocumentProfile, FieldSpec};

/// Maximum acceptable deposit return period in days
pub const MAX_DEPOSIT_RETURN_DAYS: u32 = 30;

pub static PROFILE: DocumentProfile = DocumentProfile {
    doc_type: DocumentType::Lease,
    category: "Real Estate",
    jurisdiction: "ON",
    keywords: &[
        "lease", "tenant", "landlord", "rent", "premises", "tenancy", "sublet",
    ],
    phrases: &[
        "residential lease",
        "lease agreement",
        "monthly rent",
        "lease term",
        "rental unit",
    ],
    patterns: &[r"(?i)rent\s+(?:of|is)\s+\$", r"(?i)term\s+of\s+the\s+lease"],
    filename_hints: &["lease", "rental", "tenancy"],
    required_fields: &[
        FieldSpec {
            name: "landlord",
            label: "Landlord",
            detect: &[r"(?i)\blandlord\b", r"(?i)\blessor\b"],
            extract: Some(r"(?i)landlord\s*:\s*([A-Z][A-Za-z .'\-]{1,60})"),
        },
        FieldSpec {
            name: "tenant",
            label: "Tenant",
            detect: &[r"(?i)\btenant\b", r"(?i)\blessee\b"],
            extract: Some(r"(?i)tenant\s*:\s*([A-Z][A-Za-z .'\-]{1,60})"),
        },
        FieldSpec {
            name: "monthly_rent",
            label: "Monthly Rent",
            detect: &[r"(?i)monthly\s+rent", r"(?i)rent\s+(?:of|is)"],
            extract: Some(r"(?i)rent\s*(?:of|is|:)?\s*(\$?\s?\d[\d,]*(?:\.\d{2})?)"),
        },
    ],
    optional_fields: &[
        FieldSpec {
            name: "premises_address",
            label: "Premises Address",
            detect: &[r"(?i)premises", r"(?i)rental\s+unit", r"(?i)property\s+address"],
            extract: Some(r"(?i)premises\s+(?:at|located\s+at)\s+([^\n]{5,100})"),
        },
        FieldSpec {
            name: "lease_term",
            label: "Lease Term",
            detect: &[r"(?i)term\s+of", r"(?i)\d+[\s-]*(?:month|year)\s+term"],
            extract: None,
        },
        FieldSpec {
            name: "security_deposit",
            label: "Security Deposit",
            detect: &[r"(?i)security\s+deposit", r"(?i)rent\s+deposit", r"(?i)last\s+month'?s?\s+rent"],
            extract: Some(r"(?i)deposit\s+of\s+(\$?\s?\d[\d,]*(?:\.\d{2})?)"),
        },
        FieldSpec {
            name: "commencement_date",
            label: "Commencement Date",
            detect: &[r"(?i)commenc\w+\s+(?:on|date)", r"(?i)start\s+date"],
            extract: None,
        },
    ],
    signature_roles: &["landlord", "tenant"],
    max_age_days: Some(730),
};

/// Deposit return periods beyond MAX_DEPOSIT_RETURN_DAYS are flagged
pub fn check_deposit_return_period(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(days) = extract_days_near(text, &["deposit"]) {
        if days > MAX_DEPOSIT_RETURN_DAYS {
            issues.push(Issue {
                rule: "deposit.return_period".to_string(),
                severity: Severity::Warning,
                message: format!(
                    "Deposit return period of {} days exceeds the {}-day maximum",
                    days, MAX_DEPOSIT_RETURN_DAYS
                ),
                text_snippet: Some(extract_snippet(text, "deposit")),
            });
        }
    }

    issues
}
