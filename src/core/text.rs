// src/core/text.rs

/// Unicode-aware lowercase (not just ASCII), so "ÉCOLE" and "école" compare equal.
#[inline]
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test. `needle_lower` must already be lowercased;
/// callers lower it once per filter pass, not once per record.
#[inline]
pub fn contains_lower(haystack: &str, needle_lower: &str) -> bool {
    to_lower(haystack).contains(needle_lower)
}

/// Text before the first comma, trimmed. "San Francisco, CA" → "San Francisco".
pub fn first_segment(s: &str) -> &str {
    s.split(',').next().unwrap_or(s).trim()
}
