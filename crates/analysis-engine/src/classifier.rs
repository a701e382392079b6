//! Document type classification
//!
//! Scores each profile's indicators against the text and filename, then
//! picks the best. Below the acceptance threshold the classifier falls
//! back to filename hints, and finally to the generic profile. There is
//! no error case; a classification is always produced.

use regex::Regex;
use shared_types::DocumentType;

use crate::profiles::{self, DocumentProfile};

/// Points per indicator hit; each indicator counts at most once
const KEYWORD_POINTS: u32 = 10;
const PHRASE_POINTS: u32 = 15;
const PATTERN_POINTS: u32 = 15;
const FILENAME_POINTS: u32 = 20;

/// Minimum confidence for a scored classification to be accepted
pub const ACCEPTANCE_THRESHOLD: f32 = 0.45;

/// Confidence assigned on a filename-only fallback hit
const FILENAME_FALLBACK_CONFIDENCE: f32 = 0.6;

/// Confidence assigned to the generic fallback
const GENERIC_CONFIDENCE: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub doc_type: DocumentType,
    pub confidence: f32,
}

/// Classify text and filename against the static profile table
pub fn classify(text: &str, filename: &str) -> Classification {
    let text_lower = text.to_lowercase();
    let filename_lower = filename.to_lowercase();

    let best = profiles::all()
        .into_iter()
        .map(|profile| (profile, score_profile(&text_lower, &filename_lower, profile)))
        .max_by_key(|(_, points)| *points);

    if let Some((profile, points)) = best {
        let confidence = confidence_from_points(points);
        if confidence >= ACCEPTANCE_THRESHOLD {
            return Classification {
                doc_type: profile.doc_type,
                confidence,
            };
        }
    }

    // Filename-substring fallback across all profiles
    if !filename_lower.is_empty() {
        for profile in profiles::all() {
            if profile
                .filename_hints
                .iter()
                .any(|hint| filename_lower.contains(hint))
            {
                return Classification {
                    doc_type: profile.doc_type,
                    confidence: FILENAME_FALLBACK_CONFIDENCE,
                };
            }
        }
    }

    Classification {
        doc_type: DocumentType::Generic,
        confidence: GENERIC_CONFIDENCE,
    }
}

fn score_profile(text_lower: &str, filename_lower: &str, profile: &DocumentProfile) -> u32 {
    let mut points = 0;

    for keyword in profile.keywords {
        if text_lower.contains(keyword) {
            points += KEYWORD_POINTS;
        }
    }

    for phrase in profile.phrases {
        if text_lower.contains(phrase) {
            points += PHRASE_POINTS;
        }
    }

    for pattern in profile.patterns {
        if Regex::new(pattern).unwrap().is_match(text_lower) {
            points += PATTERN_POINTS;
        }
    }

    for hint in profile.filename_hints {
        if filename_lower.contains(hint) {
            points += FILENAME_POINTS;
        }
    }

    points
}

fn confidence_from_points(points: u32) -> f32 {
    (points as f32 / 100.0).min(0.95)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_purchase_agreement() {
        let text = "Agreement of Purchase and Sale. The Buyer agrees to pay the \
                    Purchase Price of $750,000 to the Seller, with closing on June 30.";
        let result = classify(text, "aps-draft.pdf");
        assert_eq!(result.doc_type, DocumentType::PurchaseAgreement);
        assert!(result.confidence >= ACCEPTANCE_THRESHOLD);
    }

    #[test]
    fn classifies_lease() {
        let text = "Residential Lease Agreement between Landlord and Tenant. \
                    Monthly rent of $1,850 for the premises.";
        let result = classify(text, "unit-4b.pdf");
        assert_eq!(result.doc_type, DocumentType::Lease);
        assert!(result.confidence >= ACCEPTANCE_THRESHOLD);
    }

    #[test]
    fn classifies_nda() {
        let text = "Non-Disclosure Agreement. The Receiving Party shall keep all \
                    Confidential Information of the Disclosing Party in strict confidence, \
                    including trade secrets and proprietary data.";
        let result = classify(text, "mutual.pdf");
        assert_eq!(result.doc_type, DocumentType::Nda);
        assert!(result.confidence >= ACCEPTANCE_THRESHOLD);
    }

    #[test]
    fn no_indicators_falls_back_to_generic() {
        let text = "The quick brown fox jumps over the lazy dog.";
        let result = classify(text, "notes.txt");
        assert_eq!(result.doc_type, DocumentType::Generic);
        assert!(result.confidence <= 0.4);
    }

    #[test]
    fn empty_text_is_generic_low_confidence() {
        let result = classify("", "");
        assert_eq!(result.doc_type, DocumentType::Generic);
        assert!(result.confidence <= 0.3);
    }

    #[test]
    fn filename_rescues_weak_text() {
        let result = classify("scanned pages, no machine text", "signed-lease.pdf");
        assert_eq!(result.doc_type, DocumentType::Lease);
        assert!((result.confidence - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn confidence_is_capped() {
        assert_eq!(confidence_from_points(500), 0.95);
    }
}
