//! Heuristic legal document analysis
//!
//! Classifies a document from filename/content indicators, checks the
//! classified profile's expected fields, scores heuristic validity, and
//! answers canned questions about the result. Pure functions over a
//! static profile table; persistence and transport live in the API layer.

pub mod classifier;
pub mod completeness;
pub mod extractors;
pub mod patterns;
pub mod profiles;
pub mod qa;
pub mod validity;

use chrono::{NaiveDate, Utc};
use shared_types::AnalysisResult;

pub use classifier::{classify, Classification};
pub use completeness::check_completeness;
pub use validity::check_validity;

/// AnalysisEngine entry point
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline: classify, check fields, score validity
    pub fn analyze(&self, text: &str, filename: &str) -> AnalysisResult {
        self.analyze_at(text, filename, Utc::now().date_naive())
    }

    /// Like `analyze`, with an explicit "today" for deterministic tests
    pub fn analyze_at(&self, text: &str, filename: &str, today: NaiveDate) -> AnalysisResult {
        let classification = classifier::classify(text, filename);
        let profile = profiles::profile_for(classification.doc_type);

        let completeness = completeness::check_completeness(text, profile);
        let validity = validity::check_validity(text, profile, today);
        let suggested_actions = validity::suggested_actions(&completeness.fields, &validity.issues);

        AnalysisResult {
            document_type: classification.doc_type,
            document_type_name: classification.doc_type.display_name().to_string(),
            category: profile.category.to_string(),
            jurisdiction: profile.jurisdiction.to_string(),
            confidence: classification.confidence,
            completeness_score: completeness.score,
            completeness_status: completeness.status,
            fields: completeness.fields,
            validity_score: validity.score,
            validity_status: validity.status,
            issues: validity.issues,
            suggested_actions,
            analyzed_at: Utc::now().timestamp() as u64,
        }
    }

    /// Answer a canned question about a prior analysis
    pub fn answer(&self, question: &str, result: &AnalysisResult) -> String {
        qa::answer(question, result)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{CompletenessStatus, DocumentType, ValidityStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn analyzes_signed_purchase_agreement() {
        let engine = AnalysisEngine::new();
        let text = "Agreement of Purchase and Sale dated 2024-05-01. \
                    Purchase Price: $750,000. Buyer: John Doe. Seller: Jane Smith. \
                    Buyer Signature: [Signed]. Seller Signature: [Signed].";
        let result = engine.analyze_at(text, "aps.pdf", today());

        assert_eq!(result.document_type, DocumentType::PurchaseAgreement);
        assert!(result.completeness_score >= 80);
        assert!(matches!(
            result.validity_status,
            ValidityStatus::Valid | ValidityStatus::ValidWithIssues
        ));
    }

    #[test]
    fn empty_input_falls_back_to_generic() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze_at("", "", today());

        assert_eq!(result.document_type, DocumentType::Generic);
        assert!(result.confidence <= 0.3);
        assert_eq!(result.completeness_score, 0);
        assert_eq!(result.completeness_status, CompletenessStatus::Incomplete);
    }

    #[test]
    fn missing_signatures_produce_actions() {
        let engine = AnalysisEngine::new();
        let text = "Residential Lease Agreement. Landlord: Acme Properties. \
                    Tenant: Sam Lee. Monthly rent of $1,850. Dated 2024-04-01.";
        let result = engine.analyze_at(text, "lease.pdf", today());

        assert_eq!(result.document_type, DocumentType::Lease);
        assert!(result
            .suggested_actions
            .iter()
            .any(|a| a.contains("signature")));
    }

    #[test]
    fn result_serializes_to_json() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze_at("Confidential Information means all data.", "nda.txt", today());

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("completeness_score"));

        let back: shared_types::AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.document_type, result.document_type);
    }
}
