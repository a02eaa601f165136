use regex::Regex;
use std::sync::LazyLock;

/// Footnote markers with their content, then any remaining tag
static MARKUP: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)<sup[^>]*>.*?</sup>|<[^>]+>").ok());

/// Remove footnote markup from a translation
pub fn strip_markup(text: &str) -> String {
    match MARKUP.as_ref() {
        Some(pattern) => pattern.replace_all(text, "").trim().to_string(),
        None => text.trim().to_string(),
    }
}
