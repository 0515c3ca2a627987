use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// YouTube Data API v3 key — required for fetching comments.
    pub youtube_api_key: String,
    /// Data API base URL (defaults to https://www.googleapis.com/youtube/v3).
    /// Overridable so tests can point the client at a local stub server.
    pub youtube_api_url: String,
    /// Path to the line-delimited abusive keyword list, reloaded on
    /// every run (no caching across runs).
    pub keywords_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the API key has no default — `check` and `keywords` work
    /// without it, `analyze` needs it to reach the Data API.
    pub fn load() -> Result<Self> {
        Ok(Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            youtube_api_url: env::var("YOUTUBE_API_URL")
                .unwrap_or_else(|_| crate::youtube::client::DEFAULT_API_URL.to_string()),
            keywords_path: env::var("EMBER_KEYWORDS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./abusive_keywords.txt")),
        })
    }

    /// Check that the YouTube API key is configured.
    /// Call this before any operation that talks to the Data API.
    pub fn require_youtube(&self) -> Result<()> {
        if self.youtube_api_key.is_empty() {
            anyhow::bail!(
                "YOUTUBE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
