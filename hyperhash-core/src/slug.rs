//! Slug derivation — URL-safe identifiers from free-text topics.
//!
//! Output alphabet is exactly `[a-z0-9-]`: no leading/trailing hyphens,
//! no doubled hyphens. An input with nothing to keep yields the empty
//! string; callers that turn slugs into file names must reject that case.

/// Derive a URL-safe slug from an arbitrary topic string.
///
/// Lowercases, strips everything outside `[a-z0-9\s-]`, collapses
/// whitespace runs to single hyphens, collapses hyphen runs, and trims
/// hyphens at both ends.
pub fn slugify(topic: &str) -> String {
    let mut slug = String::with_capacity(topic.len());
    let mut pending_hyphen = false;

    for ch in topic.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_hyphen = false;
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
        // Everything else (punctuation, emoji, non-ASCII letters) is stripped
        // without acting as a separator.
    }

    slug
}
