use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{AppError, FetchError, Result};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(8);
pub const MAX_FETCHED_CHARS: usize = 2000;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub max_chars: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: FETCH_TIMEOUT,
            max_chars: MAX_FETCHED_CHARS,
        }
    }
}

/// Single-attempt GET of a page's raw body. Built once at startup and shared
/// read-only across requests.
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    client: Client,
    config: FetchConfig,
}

impl ContentFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Fetches `url` and returns at most `max_chars` characters of the body,
    /// markup and all. Non-2xx statuses and empty bodies count as failures.
    pub async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let url = url.trim();
        debug!("Fetching content from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.classify_error(e))?;

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.config.timeout)
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        if body.is_empty() {
            warn!("Empty body from: {}", url);
            return Err(FetchError::Empty);
        }

        let content = truncate_chars(&body, self.config.max_chars);
        debug!(
            "Fetched {} bytes from {}, keeping {} chars",
            body.len(),
            url,
            content.chars().count()
        );
        Ok(content.to_string())
    }

    fn classify_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.config.timeout)
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
