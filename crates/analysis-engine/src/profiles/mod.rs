//! Static document type profiles
//!
//! Each module defines the recognition indicators, expected fields,
//! signature roles, and validity thresholds for one legal document
//! category, plus any type-specific validity checks. Profiles are loaded
//! at startup and never mutated at runtime; thresholds that differed
//! between copies of the source heuristics are canonicalized here.

pub mod employment;
pub mod generic;
pub mod lease;
pub mod nda;
pub mod purchase_agreement;
pub mod will;

use shared_types::{DocumentType, Issue};

/// One expected field: how to detect it and, optionally, how to pull a value
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Detection regex alternatives; any match counts as present
    pub detect: &'static [&'static str],
    /// Secondary extraction regex; capture group 1 is the value
    pub extract: Option<&'static str>,
}

/// Static profile describing one document category
pub struct DocumentProfile {
    pub doc_type: DocumentType,
    pub category: &'static str,
    pub jurisdiction: &'static str,
    /// Single-word indicators, +10 classification points each
    pub keywords: &'static [&'static str],
    /// Multi-word indicators, +15 points each
    pub phrases: &'static [&'static str],
    /// Regex indicators, +15 points each
    pub patterns: &'static [&'static str],
    /// Filename substrings, +20 points each
    pub filename_hints: &'static [&'static str],
    pub required_fields: &'static [FieldSpec],
    pub optional_fields: &'static [FieldSpec],
    /// Roles whose signatures the validity check expects
    pub signature_roles: &'static [&'static str],
    /// Documents older than this are flagged stale
    pub max_age_days: Option<i64>,
}

/// All classifiable profiles, in classification order. The generic profile
/// is the fallback and is not scored.
pub fn all() -> [&'static DocumentProfile; 5] {
    [
        &purchase_agreement::PROFILE,
        &lease::PROFILE,
        &nda::PROFILE,
        &employment::PROFILE,
        &will::PROFILE,
    ]
}

pub fn profile_for(doc_type: DocumentType) -> &'static DocumentProfile {
    match doc_type {
        DocumentType::PurchaseAgreement => &purchase_agreement::PROFILE,
        DocumentType::Lease => &lease::PROFILE,
        DocumentType::Nda => &nda::PROFILE,
        DocumentType::Employment => &employment::PROFILE,
        DocumentType::Will => &will::PROFILE,
        DocumentType::Generic => &generic::PROFILE,
    }
}

/// Type-specific validity checks beyond the shared signature/date rules
pub fn extra_checks(doc_type: DocumentType, text: &str) -> Vec<Issue> {
    match doc_type {
        DocumentType::PurchaseAgreement => purchase_agreement::check_deposit_minimum(text),
        DocumentType::Lease => lease::check_deposit_return_period(text),
        DocumentType::Employment => employment::check_probation_period(text),
        DocumentType::Will => will::check_witnesses(text),
        DocumentType::Nda | DocumentType::Generic => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_has_required_fields() {
        for profile in all() {
            assert!(
                !profile.required_fields.is_empty(),
                "{:?} has no required fields",
                profile.doc_type
            );
        }
        assert!(!generic::PROFILE.required_fields.is_empty());
    }

    #[test]
    fn every_field_regex_compiles() {
        let mut profiles: Vec<&DocumentProfile> = all().to_vec();
        profiles.push(&generic::PROFILE);

        for profile in profiles {
            for spec in profile
                .required_fields
                .iter()
                .chain(profile.optional_fields.iter())
            {
                for pattern in spec.detect {
                    regex::Regex::new(pattern)
                        .unwrap_or_else(|e| panic!("{}/{}: {}", spec.name, pattern, e));
                }
                if let Some(pattern) = spec.extract {
                    regex::Regex::new(pattern)
                        .unwrap_or_else(|e| panic!("{}/{}: {}", spec.name, pattern, e));
                }
            }
            for pattern in profile.patterns {
                regex::Regex::new(pattern).expect("indicator pattern");
            }
        }
    }

    #[test]
    fn profile_lookup_matches_doc_type() {
        for profile in all() {
            assert_eq!(profile_for(profile.doc_type).doc_type, profile.doc_type);
        }
    }
}
