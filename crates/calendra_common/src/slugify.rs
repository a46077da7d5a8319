// --- File: crates/calendra_common/src/slugify.rs ---
//! Slug generation for event type URLs.

/// Turns `input` into a URL-safe, ASCII-only slug.
///
/// Non-ASCII text is transliterated first ("Zürich Café" -> "zurich-cafe").
///
/// `for_displaying_input` is accepted for live-input callers but does not
/// change the result: trailing dashes are always trimmed.
pub fn slugify(input: &str, _for_displaying_input: bool) -> String {
    if input.is_empty() {
        return String::new();
    }
    slug::slugify(input)
}
