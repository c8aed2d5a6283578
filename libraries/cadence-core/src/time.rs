//! Elapsed-time display formatting

/// Format elapsed seconds as `m:ss` for the progress display.
///
/// Non-finite or negative input (unknown duration, no metadata yet)
/// renders as `0:00`.
pub fn format_timestamp(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }

    let total = secs as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
