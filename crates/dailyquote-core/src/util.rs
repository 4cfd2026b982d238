//! Small text helpers shared by the library and its front ends.

/// Trim optional text, mapping `None` and blank strings to `None`.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Trim and cap text at 180 characters for log lines and error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}
