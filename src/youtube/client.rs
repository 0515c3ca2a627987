// YouTube Data API v3 client — unauthenticated REST over HTTP.
//
// All the endpoints Ember needs are readable with just an API key passed
// as a query parameter, so this is a thin reqwest wrapper with a generic
// deserializing GET helper. The client is constructed once from Config
// and passed explicitly into the comment source — no ambient globals.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default base URL for YouTube Data API v3 read operations.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// HTTP client for the YouTube Data API.
pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// Defaults to `https://www.googleapis.com/youtube/v3` — pass a
    /// different URL to hit a local stub server in tests.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("ember/0.1 (abusive-comment-detection)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Make a GET request to a Data API resource and deserialize the response.
    ///
    /// `resource` is the REST resource name (e.g. "commentThreads").
    /// `params` are query string key-value pairs; the API key is appended
    /// automatically.
    pub async fn api_get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        debug!(resource = resource, "Data API GET request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Data API request failed: {resource}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Data API {resource} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {resource} response"))
    }
}
