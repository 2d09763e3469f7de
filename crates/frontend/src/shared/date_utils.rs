/// Utilities for date and time formatting
///
/// Server timestamps arrive as ISO strings and are shown es-PE style.
use chrono::{DateTime, FixedOffset, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    DateTime::<FixedOffset>::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
///
/// Unparseable input is returned as received.
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_iso(datetime_str.trim()) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => datetime_str.to_string(),
    }
}

/// Like [`format_datetime`], with "-" for a missing or empty value
pub fn format_datetime_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_datetime(v),
        _ => "-".to_string(),
    }
}
