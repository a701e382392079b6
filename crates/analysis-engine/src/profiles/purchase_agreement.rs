//! Agreement of Purchase and Sale (APS) profile
//!
//! Ontario-style residential purchase agreement. Type-specific rule: the
//! deposit should be at least 5% of the purchase price.

use crate::extractors::extract_money_near;
use crate::patterns::extract_snippet;
use shared_types::{DocumentType, Issue, Severity};

use super::{DocumentProfile, FieldSpec};

/// Minimum deposit as a percentage of the purchase price
pub const MIN_DEPOSIT_PERCENT: f64 = 5.0;

pub static PROFILE: DocumentProfile = DocumentProfile {
    doc_type: DocumentType::PurchaseAgreement,
    category: "Real Estate",
    jurisdiction: "ON",
    keywords: &[
        "purchase", "buyer", "seller", "closing", "deposit", "conveyance", "chattels",
        "irrevocable",
    ],
    phrases: &[
        "agreement of purchase and sale",
        "purchase price",
        "completion date",
        "offer to purchase",
        "requisition date",
    ],
    patterns: &[r"(?i)purchase\s+price\s*[:\-]", r"(?i)balance\s+of\s+the\s+purchase\s+price"],
    filename_hints: &["aps", "purchase", "offer"],
    required_fields: &[
        FieldSpec {
            name: "purchase_price",
            label: "Purchase Price",
            detect: &[r"(?i)purchase\s+price", r"(?i)sale\s+price"],
            extract: Some(r"(?i)purchase\s+price\s*:?\s*(\$?\s?\d[\d,]*(?:\.\d{2})?)"),
        },
        FieldSpec {
            name: "buyer",
            label: "Buyer",
            detect: &[r"(?i)\bbuyer\b", r"(?i)\bpurchaser\b"],
            extract: Some(r"(?i)buyer\s*:\s*([A-Z][A-Za-z .'\-]{1,60})"),
        },
        FieldSpec {
            name: "seller",
            label: "Seller",
            detect: &[r"(?i)\bseller\b", r"(?i)\bvendor\b"],
            extract: Some(r"(?i)seller\s*:\s*([A-Z][A-Za-z .'\-]{1,60})"),
        },
    ],
    optional_fields: &[
        FieldSpec {
            name: "property_address",
            label: "Property Address",
            detect: &[
                r"(?i)property\s+address",
                r"(?i)municipal\s+address",
                r"(?i)legal\s+description",
            ],
            extract: Some(r"(?i)(?:property|municipal)\s+address\s*:\s*([^\n]{5,100})"),
        },
        FieldSpec {
            name: "closing_date",
            label: "Closing Date",
            detect: &[r"(?i)closing\s+date", r"(?i)completion\s+date"],
            extract: Some(r"(?i)(?:closing|completion)\s+date\s*:?\s*([^\n]{4,40})"),
        },
        FieldSpec {
            name: "deposit",
            label: "Deposit",
            detect: &[r"(?i)\bdeposit\b"],
            extract: Some(r"(?i)deposit\s+of\s+(\$?\s?\d[\d,]*(?:\.\d{2})?)"),
        },
        FieldSpec {
            name: "conditions",
            label: "Conditions",
            detect: &[
                r"(?i)conditional\s+upon",
                r"(?i)subject\s+to\s+financing",
                r"(?i)home\s+inspection",
            ],
            extract: None,
        },
    ],
    signature_roles: &["buyer", "seller"],
    max_age_days: Some(365),
};

/// Deposit must be at least MIN_DEPOSIT_PERCENT of the purchase price.
/// Skipped when either amount cannot be extracted.
pub fn check_deposit_minimum(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    let deposit = extract_money_near(text, &["deposit"]);
    let price = extract_money_near(text, &["purchase", "price"]);

    if let (Some(deposit), Some(price)) = (deposit, price) {
        if price > 0.0 {
            let percent = deposit / price * 100.0;
            if percent < MIN_DEPOSIT_PERCENT {
                issues.push(Issue {
                    rule: "deposit.minimum".to_string(),
                    severity: Severity::Warning,
                    message: format!(
                        "Deposit is {:.1}% of the purchase price; at least {:.0}% is customary",
                        percent, MIN_DEPOSIT_PERCENT
                    ),
                    text_snippet: Some(extract_snippet(text, "deposit")),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_undersized_deposit() {
        let text = "Purchase Price: $750,000. The Buyer submits a deposit of $10,000.";
        let issues = check_deposit_minimum(text);
        assert!(issues.iter().any(|i| i.rule == "deposit.minimum"));
    }

    #[test]
    fn accepts_customary_deposit() {
        let text = "Purchase Price: $750,000. The Buyer submits a deposit of $37,500.";
        assert!(check_deposit_minimum(text).is_empty());
    }

    #[test]
    fn skips_when_amounts_absent() {
        assert!(check_deposit_minimum("A deposit shall be paid on acceptance.").is_empty());
    }
}
