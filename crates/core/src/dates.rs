//! Date string normalization.
//!
//! Record dates arrive in several textual shapes (RFC-1123 strings from
//! browser `Date` serialization, ISO 8601 date-times, bare `YYYY-MM-DD`)
//! and must be stored and returned in canonical `YYYY-MM-DD` form.

use chrono::{DateTime, NaiveDate};

/// Reduce a date string to canonical `YYYY-MM-DD` form where possible.
///
/// Rules, applied in order to the trimmed input:
/// - values containing a comma and the token `GMT` are parsed as RFC-1123
///   style date-times and reformatted; unparseable values fall through to
///   the next rule instead of failing;
/// - values that look like an ISO date prefix (at least ten characters
///   with `-` at positions 4 and 7) are cut to their first ten characters;
/// - anything else is returned unchanged for the storage layer to judge.
pub fn normalize_date(value: &str) -> String {
    let v = value.trim();

    if v.contains(',') && v.contains("GMT") {
        if let Ok(dt) = DateTime::parse_from_rfc2822(v) {
            return dt.format("%Y-%m-%d").to_string();
        }
    }

    // Positions are counted in characters, not bytes, so multi-byte input
    // cannot split a code point.
    let chars: Vec<char> = v.chars().collect();
    if chars.len() >= 10 && chars[4] == '-' && chars[7] == '-' {
        return chars[..10].iter().collect();
    }

    value.to_string()
}

/// Format a date coming back from the storage layer for API output.
pub fn iso_date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
