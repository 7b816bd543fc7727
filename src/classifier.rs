use once_cell::sync::Lazy;
use regex::Regex;

// Only the scheme prefix is checked; anything after it is left to the HTTP client.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://").expect("Failed to compile URL pattern")
});

/// Returns true if `text`, once trimmed, starts with `http://` or `https://`.
pub fn is_url(text: &str) -> bool {
    URL_PATTERN.is_match(text.trim())
}
