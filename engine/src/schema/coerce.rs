// Cell-level coercion: every function here turns one raw text cell into a
// typed value, returning None instead of an error. The per-field policy
// (drop the row, substitute zero, or fail the whole transform) belongs to
// the schema matchers, not to these helpers.
use chrono::{Month, NaiveDate};
use std::str::FromStr;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Parses a calendar date in any of the recognized formats. A bare
/// year-month value ("2023-01") resolves to the first of that month.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()
}

/// Parses a decimal number, tolerating comma thousand separators
/// ("1,200.50" -> 1200.5).
pub fn parse_number(s: &str) -> Option<f64> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return None;
    }
    f64::from_str(&normalized).ok()
}

/// Resolves a month cell to its 1-12 index. Accepts a numeric index or a
/// month name ("Jan", "january"); a mixed column resolves row by row.
pub fn parse_month(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    Month::from_str(s).ok().map(|m| m.number_from_month())
}

/// Rounds to two decimal places (the precision used for estimated kg).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
