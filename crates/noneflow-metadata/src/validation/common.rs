//! Common validation utilities shared by the field rules.

use url::Url;

/// Validates that a string does not exceed a maximum character count.
///
/// Counts Unicode scalar values, not bytes, so `"插件标签"` is 4 characters.
pub fn validate_length(value: &str, max_chars: usize) -> bool {
    char_count(value) <= max_chars
}

/// Counts the number of characters in a string.
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// Validates that a URL is an absolute `http` or `https` URL with a host.
pub fn validate_url(url: &str) -> bool {
    match Url::parse(url.trim()) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Checks if a string is empty or contains only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
