// src/core/sanitize.rs

/// Display form of a team name: surrounding whitespace removed, inner
/// spacing left alone.
pub fn trim_name(s: &str) -> &str {
    s.trim()
}

/// Lookup key for a team name: trimmed and case-folded.
/// Keys dedupe "chiefs" / " Chiefs " onto one record; the record itself
/// keeps the first-seen display casing.
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}
