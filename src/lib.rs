pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod summarizer;

use config::Config;
use error::Result;
use fetcher::ContentFetcher;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub fetcher: ContentFetcher,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher = ContentFetcher::new(config.fetch.clone())?;
        Ok(AppState { fetcher })
    }
}
