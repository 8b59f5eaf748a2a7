//! Shared utility functions.

/// Produce a log-safe preview of `s`: at most `max_chars` characters, with
/// an ellipsis appended when anything was cut.
///
/// Counts characters rather than bytes, so multi-byte text is never split
/// mid-character.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
