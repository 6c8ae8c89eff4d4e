use chrono::NaiveDateTime;

const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses an upstream `created` timestamp.
///
/// Accepts `2026-01-14T10:30:45Z` and `2026-01-14T10:30:45.123Z`; the
/// fractional part is discarded so both forms land on whole seconds.
pub fn parse_created_at(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    let whole_seconds = match trimmed.split_once('.') {
        Some((head, _fraction)) => format!("{head}Z"),
        None => trimmed.to_string(),
    };
    NaiveDateTime::parse_from_str(&whole_seconds, CREATED_FORMAT).ok()
}

/// Abbreviated month-day label, e.g. `Jan 14`.
pub fn format_short_date(value: &NaiveDateTime) -> String {
    value.format("%b %d").to_string()
}

/// Whole days between two timestamps, truncated toward zero.
pub fn whole_days_between(earlier: &NaiveDateTime, later: &NaiveDateTime) -> i64 {
    (*later - *earlier).num_days()
}
