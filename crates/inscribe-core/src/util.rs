//! Shared utility functions used across multiple modules.

/// Normalize text by trimming whitespace and rejecting empties.
///
/// Returns `None` when the trimmed value is empty. UI-sourced input is noisy;
/// callers use this to decide between soft-fail and proceeding.
pub fn normalize_text(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Truncate text to at most 24 characters for log previews.
pub fn log_preview(value: &str) -> String {
    let trimmed = value.trim();
    let preview: String = trimmed.chars().take(24).collect();
    if preview.len() < trimmed.len() {
        format!("{preview}...")
    } else {
        preview
    }
}

/// Current Unix timestamp in milliseconds.
pub fn unix_timestamp_now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
