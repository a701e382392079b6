// Date extraction and age arithmetic for the validity rules
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISO_DATE_RE: Regex = Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap();
    static ref SLASH_DATE_RE: Regex = Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap();
    static ref LONG_DATE_RE: Regex = Regex::new(
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),?\s+(\d{4})\b"
    )
    .unwrap();
}

/// Finds the first parseable date in the text. Recognizes ISO (2024-03-15),
/// North American slash (3/15/2024), and long form (March 15, 2024) dates.
pub fn extract_first_date(text: &str) -> Option<NaiveDate> {
    if let Some(cap) = ISO_DATE_RE.captures(text) {
        if let Some(date) = ymd(&cap[1], &cap[2], &cap[3]) {
            return Some(date);
        }
    }

    if let Some(cap) = LONG_DATE_RE.captures(text) {
        let month = month_number(&cap[1]);
        if let Some(date) = ymd(&cap[3], &month.to_string(), &cap[2]) {
            return Some(date);
        }
    }

    if let Some(cap) = SLASH_DATE_RE.captures(text) {
        // Month-first, as the source documents use
        if let Some(date) = ymd(&cap[3], &cap[1], &cap[2]) {
            return Some(date);
        }
    }

    None
}

/// Age of the first detected date, in days relative to `today`.
/// Future-dated documents report zero.
pub fn document_age_days(text: &str, today: NaiveDate) -> Option<i64> {
    extract_first_date(text).map(|date| (today - date).num_days().max(0))
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        year.parse().ok()?,
        month.parse().ok()?,
        day.parse().ok()?,
    )
}

fn month_number(name: &str) -> u32 {
    match name.to_lowercase().as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        _ => 12,
    }
}
