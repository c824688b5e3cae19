//! Date range rendering for experience, education and training rows.

/// End-date marker for ongoing positions, compared case-insensitively.
pub const PRESENT_MARKER: &str = "heute";
pub const DATE_NOT_SPECIFIED: &str = "Date not specified";
pub const NO_DATE_MENTIONED: &str = "No date mentioned";

/// Formats a `YYYY-MM[-DD]` string as `MM / YYYY`.
///
/// A value without a month component renders the year alone.
pub fn format_month_year(date: &str) -> String {
    let mut parts = date.trim().split('-');
    let year = parts.next().unwrap_or_default();
    match parts.next() {
        Some(month) => format!("{month} / {year}"),
        None => year.to_string(),
    }
}

/// Renders `start – end` as month/year pairs.
///
/// - no start: [`DATE_NOT_SPECIFIED`]
/// - no end: start only
/// - end equal to [`PRESENT_MARKER`]: `MM / YYYY – heute`
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> String {
    let start = match start.filter(|s| !s.is_empty()) {
        Some(s) => s,
        None => return DATE_NOT_SPECIFIED.to_string(),
    };

    let end = match end.filter(|e| !e.is_empty()) {
        Some(e) => e,
        None => return format_month_year(start),
    };

    if end.trim().to_lowercase() == PRESENT_MARKER {
        return format!("{} – {PRESENT_MARKER}", format_month_year(start));
    }

    format!("{} – {}", format_month_year(start), format_month_year(end))
}

/// Date cell text for records whose dates are entirely optional
/// (training, certifications).
pub fn format_optional_range(start: Option<&str>, end: Option<&str>) -> String {
    let present = |d: Option<&str>| d.is_some_and(|d| !d.is_empty());
    if present(start) || present(end) {
        format_date_range(start, end)
    } else {
        NO_DATE_MENTIONED.to_string()
    }
}
