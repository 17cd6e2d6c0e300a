use chrono::{DateTime, NaiveDateTime};

/// Scales a confidence in `[0, 1]` to a whole-percent string. Both the
/// current-result panel and the history list go through here so the two
/// views can never round differently.
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round() as i64)
}

/// Formats a server timestamp for display. The service emits bare ISO
/// 8601 (`2024-05-01T12:00:00.123456`), but offsets are tolerated too.
/// Anything unparseable is shown as received rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%b %-d, %Y").to_string();
        }
    }
    raw.to_string()
}
