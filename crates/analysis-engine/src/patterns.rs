//! Shared regex patterns and text helpers used across the analysis rules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Dollar amounts: $750,000 or $1,200.50 or 750000
    pub static ref MONEY_RE: Regex =
        Regex::new(r"\$\s?(\d[\d,]*(?:\.\d{2})?)").unwrap();

    /// Signature language independent of role
    pub static ref SIGNATURE_RE: Regex =
        Regex::new(r"(?i)signature|signed\s+by|/s/|\[signed\]|executed\s+by").unwrap();
}

/// Check whether text contains signature language attributed to a role
/// (e.g. "Buyer Signature: ____" or "signed by the Tenant").
pub fn has_role_signature(text: &str, role: &str) -> bool {
    let role = regex::escape(&role.to_lowercase());
    let pattern = format!(
        r"(?i){role}[^\n]{{0,40}}(?:signature|signed|/s/)|(?:signature|signed\s+by|executed\s+by)[^\n]{{0,40}}{role}"
    );
    Regex::new(&pattern).unwrap().is_match(text)
}

/// Extract a snippet around a keyword match (up to ~150 characters)
pub fn extract_snippet(text: &str, keyword: &str) -> String {
    let text_lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();

    if let Some(pos) = text_lower.find(&keyword_lower) {
        let start = floor_char_boundary(text, pos.saturating_sub(50));
        let end = ceil_char_boundary(text, (pos + keyword.len() + 50).min(text.len()));
        format!("...{}...", text[start..end].trim())
    } else {
        text.chars().take(150).collect::<String>()
    }
}

/// Context window around a byte offset, snapped to char boundaries
pub fn context_window(text: &str, offset: usize, radius: usize) -> &str {
    let start = floor_char_boundary(text, offset.saturating_sub(radius));
    let end = ceil_char_boundary(text, (offset + radius).min(text.len()));
    &text[start..end]
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx < text.len() && !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
