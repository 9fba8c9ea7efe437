// src/core/sanitize.rs

/// Trim each piece, drop the empty ones, concatenate the rest.
pub fn strip_join<'a, I>(pieces: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Length in chars, not bytes.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Case-insensitive literal substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
