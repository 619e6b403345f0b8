use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request settings for listing-page scrapers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeParams {
    /// Whole-request timeout; a slower page counts as a failed scrape
    pub timeout: Duration,
    pub user_agent: String,
    pub accept_language: String,
    /// Maximum number of gallery images kept per listing
    pub max_images: usize,
}

impl Default for ScrapeParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            accept_language: "en-US,en;q=0.9,es;q=0.8".to_string(),
            max_images: 5,
        }
    }
}
