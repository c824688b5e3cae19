//! Download filename derived from the applicant's name.

use crate::models::CvData;

const UNKNOWN_NAME: &str = "unknown";

/// Trims, lowercases, then uppercases the first character.
fn normalize_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => first.to_uppercase().chain(chars).collect(),
        _ => lower,
    }
}

/// Collapses every run of characters other than letters, digits, `.`, `_`
/// and `-` into a single `_`.
fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for c in raw.chars() {
        if c.is_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

/// `CV_<First>_<Last>.docx`, safe for a `Content-Disposition` header.
pub fn create_filename(cv: &CvData) -> String {
    let first = normalize_name(cv.first_name.as_deref().unwrap_or(UNKNOWN_NAME));
    let last = normalize_name(cv.last_name.as_deref().unwrap_or(UNKNOWN_NAME));
    sanitize(&format!("CV_{first}_{last}.docx"))
}
