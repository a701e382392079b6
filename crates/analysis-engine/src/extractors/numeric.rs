// Numeric extraction utilities used by the validity rules
use crate::patterns::{context_window, MONEY_RE};
use regex::Regex;

/// Extracts the first dollar amount whose surrounding context mentions all
/// of the given keywords (e.g. "$37,500" near "deposit").
pub fn extract_money_near(text: &str, keywords: &[&str]) -> Option<f64> {
    for cap in MONEY_RE.captures_iter(text) {
        let m = cap.get(0)?;
        // Tight window so amounts do not borrow keywords from a neighboring clause
        let context = context_window(text, m.start(), 25).to_lowercase();

        if keywords.iter().all(|k| context.contains(k)) {
            return parse_money(cap.get(1)?.as_str());
        }
    }

    None
}

/// Extracts a day count ("within X days") whose context mentions all of the
/// given keywords.
pub fn extract_days_near(text: &str, keywords: &[&str]) -> Option<u32> {
    let text_lower = text.to_lowercase();
    let re = Regex::new(r"(?:within\s+)?(\d+)\s+days?").unwrap();

    for cap in re.captures_iter(&text_lower) {
        if let Some(num_match) = cap.get(1) {
            if let Ok(days) = num_match.as_str().parse::<u32>() {
                let start = cap.get(0).map(|m| m.start()).unwrap_or(0);
                let context = context_window(&text_lower, start, 60);

                if keywords.iter().all(|k| context.contains(k)) {
                    return Some(days);
                }
            }
        }
    }

    None
}

/// Extracts a month count ("3 month probationary period") near keywords
pub fn extract_months_near(text: &str, keywords: &[&str]) -> Option<u32> {
    let text_lower = text.to_lowercase();
    let re = Regex::new(r"(\d+)[\s-]*months?").unwrap();

    for cap in re.captures_iter(&text_lower) {
        if let Some(num_match) = cap.get(1) {
            if let Ok(months) = num_match.as_str().parse::<u32>() {
                let start = cap.get(0).map(|m| m.start()).unwrap_or(0);
                let context = context_window(&text_lower, start, 60);

                if keywords.iter().all(|k| context.contains(k)) {
                    return Some(months);
                }
            }
        }
    }

    None
}

fn parse_money(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}
