use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

pub const SHORT_BOUND: usize = 120;
pub const LONG_BOUND: usize = 250;
const ELLIPSIS: &str = "...";

/// Selects the truncation bound, not a compression ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryLength {
    #[default]
    Short,
    Long,
}

impl SummaryLength {
    pub fn bound(self) -> usize {
        match self {
            SummaryLength::Short => SHORT_BOUND,
            SummaryLength::Long => LONG_BOUND,
        }
    }
}

impl From<&str> for SummaryLength {
    /// `"short"` picks the short bound; any other value falls through to long.
    fn from(value: &str) -> Self {
        if value == "short" {
            SummaryLength::Short
        } else {
            SummaryLength::Long
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Text(String),
    Other(IgnoredAny),
}

/// A missing field defaults to short via `#[serde(default)]` on the request.
/// Once present, only the exact string `"short"` is short; `null`, numbers
/// and any other value select long.
impl<'de> Deserialize<'de> for SummaryLength {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawLength::deserialize(deserializer)? {
            RawLength::Text(value) => SummaryLength::from(value.as_str()),
            RawLength::Other(_) => SummaryLength::Long,
        })
    }
}

/// Truncates `text` to the bound for `length`, counted in `char`s, and appends
/// `...` when anything was cut. Text within the bound comes back unchanged.
pub fn summarize(text: &str, length: SummaryLength) -> String {
    let bound = length.bound();

    match text.char_indices().nth(bound) {
        Some((cut, _)) => {
            let mut result = String::with_capacity(cut + ELLIPSIS.len());
            result.push_str(&text[..cut]);
            result.push_str(ELLIPSIS);
            result
        }
        None => text.to_string(),
    }
}
