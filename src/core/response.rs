//! Discord text limits and truncation helpers
//!
//! Discord counts its limits in characters, so every helper here cuts on
//! `char` boundaries rather than bytes.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Count limits in characters, add embed field and modal title limits
//! - 1.0.0: Extracted from the poll router

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;
/// Discord embed field value limit
pub const FIELD_LIMIT: usize = 1024;
/// Discord modal title limit
pub const MODAL_TITLE_LIMIT: usize = 45;

/// Keep at most `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// Truncate to `max_chars` characters, replacing the tail with "..." when cut
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    format!("{}...", truncate_chars(text, keep))
}

/// Truncate text to fit an embed field value (hard cut, no ellipsis)
pub fn truncate_for_field(text: &str) -> String {
    truncate_chars(text, FIELD_LIMIT)
}

/// Truncate text to fit message limit, adding ellipsis if needed
pub fn truncate_for_message(text: &str) -> String {
    truncate_with_ellipsis(text, MESSAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_chars_exactly_at_limit() {
        let text = "a".repeat(FIELD_LIMIT);
        assert_eq!(truncate_for_field(&text).len(), FIELD_LIMIT);
    }

    #[test]
    fn test_truncate_for_field_cuts_long_answer() {
        let text = "b".repeat(FIELD_LIMIT + 500);
        let result = truncate_for_field(&text);
        assert_eq!(result.chars().count(), FIELD_LIMIT);
        assert!(!result.ends_with("..."));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        // 3 bytes per character
        let text = "世".repeat(FIELD_LIMIT + 1);
        let result = truncate_for_field(&text);
        assert_eq!(result.chars().count(), FIELD_LIMIT);
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        let result = truncate_with_ellipsis("Poll: Which of these is the best option?", 20);
        assert_eq!(result.chars().count(), 20);
        assert!(result.ends_with("..."));
        assert_eq!(truncate_with_ellipsis("short", 20), "short");
    }

    #[test]
    fn test_truncate_for_message_long() {
        let text = "a".repeat(3000);
        let result = truncate_for_message(&text);
        assert_eq!(result.chars().count(), MESSAGE_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(truncate_for_field(""), "");
        assert_eq!(truncate_with_ellipsis("", 5), "");
    }
}
