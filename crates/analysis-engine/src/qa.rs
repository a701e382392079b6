//! Canned Q&A over an analysis result
//!
//! Classifies a question into a fixed intent by substring matching and
//! renders a Markdown answer from the AnalysisResult. No language model,
//! no retrieval.

use shared_types::{AnalysisResult, FieldMatch, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    DocumentType,
    MissingFields,
    Validity,
    Money,
    Dates,
    Parties,
    Location,
    General,
}

fn intent_of(question: &str) -> Intent {
    let q = question.to_lowercase();

    if (q.contains("what") && q.contains("document")) || q.contains("type of") {
        Intent::DocumentType
    } else if q.contains("missing") || q.contains("incomplete") {
        Intent::MissingFields
    } else if q.contains("valid") || q.contains("ready") || q.contains("enforceable") {
        Intent::Validity
    } else if q.contains("price")
        || q.contains("cost")
        || q.contains("amount")
        || q.contains("deposit")
        || q.contains("rent")
        || q.contains("salary")
    {
        Intent::Money
    } else if q.contains("date") || q.contains("when") || q.contains("expire") {
        Intent::Dates
    } else if q.contains("who")
        || q.contains("party")
        || q.contains("parties")
        || q.contains("buyer")
        || q.contains("seller")
    {
        Intent::Parties
    } else if q.contains("where") || q.contains("address") {
        Intent::Location
    } else {
        Intent::General
    }
}

/// Render a Markdown answer for the question against the result
pub fn answer(question: &str, result: &AnalysisResult) -> String {
    match intent_of(question) {
        Intent::DocumentType => answer_document_type(result),
        Intent::MissingFields => answer_missing_fields(result),
        Intent::Validity => answer_validity(result),
        Intent::Money => answer_fields(
            result,
            &["price", "rent", "salary", "deposit", "amount"],
            "monetary amounts",
        ),
        Intent::Dates => answer_fields(result, &["date", "term"], "dates"),
        Intent::Parties => answer_fields(
            result,
            &[
                "buyer", "seller", "landlord", "tenant", "employer", "employee", "testator",
                "executor", "party", "parties",
            ],
            "parties",
        ),
        Intent::Location => answer_fields(result, &["address", "premises"], "addresses"),
        Intent::General => answer_general(result),
    }
}

fn answer_document_type(result: &AnalysisResult) -> String {
    format!(
        "**Document Type:** {}\n\nCategory: {} | Jurisdiction: {} | \
         Classification confidence: {:.0}%",
        result.document_type_name,
        result.category,
        result.jurisdiction,
        result.confidence * 100.0
    )
}

fn answer_missing_fields(result: &AnalysisResult) -> String {
    let missing: Vec<&FieldMatch> = result.missing_required().collect();

    if missing.is_empty() {
        format!(
            "All required fields were detected. Completeness: **{}** ({}%).",
            result.completeness_status.label(),
            result.completeness_score
        )
    } else {
        let mut out = format!(
            "The document is **{}** ({}%). Missing required fields:\n",
            result.completeness_status.label(),
            result.completeness_score
        );
        for field in missing {
            out.push_str(&format!("- {}\n", field.label));
        }
        out
    }
}

fn answer_validity(result: &AnalysisResult) -> String {
    let mut out = format!(
        "**Validity:** {} ({}/100)\n",
        result.validity_status.label(),
        result.validity_score
    );

    if result.issues.is_empty() {
        out.push_str("\nNo issues were detected.");
    } else {
        out.push('\n');
        for issue in &result.issues {
            let tag = match issue.severity {
                Severity::Critical => "Critical",
                Severity::Warning => "Warning",
                Severity::Info => "Info",
            };
            out.push_str(&format!("- **{}**: {}\n", tag, issue.message));
        }
    }

    out
}

fn answer_fields(result: &AnalysisResult, name_hints: &[&str], noun: &str) -> String {
    let relevant: Vec<&FieldMatch> = result
        .fields
        .iter()
        .filter(|f| f.present && name_hints.iter().any(|hint| f.name.contains(hint)))
        .collect();

    if relevant.is_empty() {
        return format!("No {} were detected in this document.", noun);
    }

    let mut out = String::new();
    for field in relevant {
        match &field.value {
            Some(value) => out.push_str(&format!("**{}:** {}\n", field.label, value)),
            None => out.push_str(&format!(
                "**{}:** detected, but no value could be extracted\n",
                field.label
            )),
        }
    }
    out
}

fn answer_general(result: &AnalysisResult) -> String {
    format!(
        "This appears to be a **{}** ({:.0}% confidence).\n\n\
         - Completeness: {} ({}%)\n\
         - Validity: {} ({}/100)\n\
         - Issues found: {}",
        result.document_type_name,
        result.confidence * 100.0,
        result.completeness_status.label(),
        result.completeness_score,
        result.validity_status.label(),
        result.validity_score,
        result.issues.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{CompletenessStatus, DocumentType, ValidityStatus};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            document_type: DocumentType::PurchaseAgreement,
            document_type_name: "Agreement of Purchase and Sale".to_string(),
            category: "Real Estate".to_string(),
            jurisdiction: "ON".to_string(),
            confidence: 0.85,
            completeness_score: 80,
            completeness_status: CompletenessStatus::MostlyComplete,
            fields: vec![
                FieldMatch {
                    name: "purchase_price".to_string(),
                    label: "Purchase Price".to_string(),
                    required: true,
                    present: true,
                    value: Some("$750,000".to_string()),
                    confidence: 0.9,
                },
                FieldMatch {
                    name: "buyer".to_string(),
                    label: "Buyer".to_string(),
                    required: true,
                    present: true,
                    value: Some("John Doe".to_string()),
                    confidence: 0.9,
                },
                FieldMatch {
                    name: "closing_date".to_string(),
                    label: "Closing Date".to_string(),
                    required: false,
                    present: false,
                    value: None,
                    confidence: 0.0,
                },
            ],
            validity_score: 90,
            validity_status: ValidityStatus::ValidWithIssues,
            issues: vec![],
            suggested_actions: vec![],
            analyzed_at: 0,
        }
    }

    #[test]
    fn price_question_includes_literal_value() {
        let result = sample_result();
        let answer = answer("What is the purchase price?", &result);
        assert!(answer.contains("$750,000"));
    }

    #[test]
    fn document_type_question_names_the_type() {
        let result = sample_result();
        let answer = answer("What kind of document is this?", &result);
        assert!(answer.contains("Agreement of Purchase and Sale"));
        assert!(answer.contains("85%"));
    }

    #[test]
    fn missing_question_reports_completeness() {
        let result = sample_result();
        let answer = answer("What is missing from this contract?", &result);
        assert!(answer.contains("Mostly Complete"));
    }

    #[test]
    fn party_question_lists_parties() {
        let result = sample_result();
        let answer = answer("Who are the parties?", &result);
        assert!(answer.contains("John Doe"));
    }

    #[test]
    fn unknown_question_gets_general_summary() {
        let result = sample_result();
        let answer = answer("Tell me about this.", &result);
        assert!(answer.contains("Agreement of Purchase and Sale"));
        assert!(answer.contains("90/100"));
    }

    #[test]
    fn validity_question_reports_status() {
        let result = sample_result();
        let answer = answer("Is this document valid?", &result);
        assert!(answer.contains("Valid with Issues"));
    }
}
