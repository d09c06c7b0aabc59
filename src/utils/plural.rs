//! Pluralization for summary messages.

/// Format count with noun, handling pluralization
///
/// `plural_count(1, "file")` is `"1 file"`, any other count adds an `s`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
