use serde::{Deserialize, Deserializer, Serialize};

use crate::summarizer::SummaryLength;

/// Body of `POST /summarise`. A missing or `null` input is empty; a missing
/// length is short, while a `null` or non-string length is long.
#[derive(Debug, Deserialize)]
pub struct SummariseRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub input: String,
    #[serde(default)]
    pub length: SummaryLength,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
