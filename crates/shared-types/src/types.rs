use serde::{Deserialize, Serialize};

/// Legal document categories the analyzer recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    PurchaseAgreement,
    Lease,
    Nda,
    Employment,
    Will,
    /// Fallback when no profile scores above the acceptance threshold
    Generic,
}

impl DocumentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::PurchaseAgreement => "Agreement of Purchase and Sale",
            DocumentType::Lease => "Residential Lease Agreement",
            DocumentType::Nda => "Non-Disclosure Agreement",
            DocumentType::Employment => "Employment Contract",
            DocumentType::Will => "Last Will and Testament",
            DocumentType::Generic => "Legal Document",
        }
    }

    /// Machine name used in API queries and the rules table
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentType::PurchaseAgreement => "purchase_agreement",
            DocumentType::Lease => "lease",
            DocumentType::Nda => "nda",
            DocumentType::Employment => "employment",
            DocumentType::Will => "will",
            DocumentType::Generic => "generic",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "purchase_agreement" => Some(DocumentType::PurchaseAgreement),
            "lease" => Some(DocumentType::Lease),
            "nda" => Some(DocumentType::Nda),
            "employment" => Some(DocumentType::Employment),
            "will" => Some(DocumentType::Will),
            "generic" => Some(DocumentType::Generic),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// Completeness buckets, inclusive lower bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessStatus {
    Complete,
    MostlyComplete,
    PartiallyComplete,
    Incomplete,
}

impl CompletenessStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => CompletenessStatus::Complete,
            70..=89 => CompletenessStatus::MostlyComplete,
            50..=69 => CompletenessStatus::PartiallyComplete,
            _ => CompletenessStatus::Incomplete,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletenessStatus::Complete => "Complete",
            CompletenessStatus::MostlyComplete => "Mostly Complete",
            CompletenessStatus::PartiallyComplete => "Partially Complete",
            CompletenessStatus::Incomplete => "Incomplete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityStatus {
    Valid,
    ValidWithIssues,
    PotentiallyInvalid,
    Invalid,
}

impl ValidityStatus {
    /// Bucket a clamped validity score. `has_issues` distinguishes Valid
    /// from ValidWithIssues in the top bucket.
    pub fn from_score(score: u8, has_issues: bool) -> Self {
        if score < 50 {
            ValidityStatus::Invalid
        } else if score < 80 {
            ValidityStatus::PotentiallyInvalid
        } else if has_issues {
            ValidityStatus::ValidWithIssues
        } else {
            ValidityStatus::Valid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValidityStatus::Valid => "Valid",
            ValidityStatus::ValidWithIssues => "Valid with Issues",
            ValidityStatus::PotentiallyInvalid => "Potentially Invalid",
            ValidityStatus::Invalid => "Invalid",
        }
    }
}

/// One expected field checked against the document text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMatch {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub present: bool,
    /// Extracted raw value, when the secondary extraction regex matched
    pub value: Option<String>,
    /// 0.0 absent, 0.7 detected without value, 0.9 detected with value
    pub confidence: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub rule: String, // e.g. "signature.buyer", "deposit.minimum"
    pub severity: Severity,
    pub message: String,
    pub text_snippet: Option<String>,
}

/// Read-only record produced per analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_type: DocumentType,
    pub document_type_name: String,
    pub category: String,
    pub jurisdiction: String,
    pub confidence: f32,
    pub completeness_score: u8,
    pub completeness_status: CompletenessStatus,
    pub fields: Vec<FieldMatch>,
    pub validity_score: u8,
    pub validity_status: ValidityStatus,
    pub issues: Vec<Issue>,
    pub suggested_actions: Vec<String>,
    pub analyzed_at: u64,
}

impl AnalysisResult {
    /// Field matches that were expected but not detected
    pub fn missing_required(&self) -> impl Iterator<Item = &FieldMatch> {
        self.fields.iter().filter(|f| f.required && !f.present)
    }

    pub fn field(&self, name: &str) -> Option<&FieldMatch> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn completeness_bucket_boundaries_are_exact() {
        assert_eq!(
            CompletenessStatus::from_score(90),
            CompletenessStatus::Complete
        );
        assert_eq!(
            CompletenessStatus::from_score(89),
            CompletenessStatus::MostlyComplete
        );
        assert_eq!(
            CompletenessStatus::from_score(70),
            CompletenessStatus::MostlyComplete
        );
        assert_eq!(
            CompletenessStatus::from_score(69),
            CompletenessStatus::PartiallyComplete
        );
        assert_eq!(
            CompletenessStatus::from_score(50),
            CompletenessStatus::PartiallyComplete
        );
        assert_eq!(
            CompletenessStatus::from_score(49),
            CompletenessStatus::Incomplete
        );
        assert_eq!(
            CompletenessStatus::from_score(0),
            CompletenessStatus::Incomplete
        );
    }

    #[test]
    fn validity_bucket_boundaries_are_exact() {
        assert_eq!(
            ValidityStatus::from_score(49, false),
            ValidityStatus::Invalid
        );
        assert_eq!(
            ValidityStatus::from_score(50, false),
            ValidityStatus::PotentiallyInvalid
        );
        assert_eq!(
            ValidityStatus::from_score(79, false),
            ValidityStatus::PotentiallyInvalid
        );
        assert_eq!(ValidityStatus::from_score(80, false), ValidityStatus::Valid);
        assert_eq!(
            ValidityStatus::from_score(80, true),
            ValidityStatus::ValidWithIssues
        );
        assert_eq!(ValidityStatus::from_score(100, false), ValidityStatus::Valid);
    }

    #[test]
    fn enums_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&DocumentType::PurchaseAgreement).unwrap(),
            "\"purchase_agreement\""
        );
        assert_eq!(
            serde_json::to_string(&CompletenessStatus::MostlyComplete).unwrap(),
            "\"mostly_complete\""
        );
        assert_eq!(
            serde_json::to_string(&ValidityStatus::ValidWithIssues).unwrap(),
            "\"valid_with_issues\""
        );

        let back: DocumentType = serde_json::from_str("\"lease\"").unwrap();
        assert_eq!(back, DocumentType::Lease);
    }

    #[test]
    fn document_type_slug_round_trips() {
        for ty in [
            DocumentType::PurchaseAgreement,
            DocumentType::Lease,
            DocumentType::Nda,
            DocumentType::Employment,
            DocumentType::Will,
            DocumentType::Generic,
        ] {
            assert_eq!(DocumentType::from_slug(ty.slug()), Some(ty));
        }
        assert_eq!(DocumentType::from_slug("mortgage"), None);
    }
}
