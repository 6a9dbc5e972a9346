///! Page fetcher for the najaf.org prayer times table

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};

use crate::config::ScraperConfig;

/// Owns the HTTP client shared by the lookup and snapshot paths.
pub struct PageFetcher {
    client: Client,
    url: String,
}

impl PageFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.source_url.clone(),
        })
    }

    /// GET the prayer times page and return the raw HTML body.
    pub async fn fetch_page(&self) -> Result<String> {
        tracing::info!("Fetching prayer times from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .send()
            .await
            .context("Failed to GET prayer times page")?
            .error_for_status()
            .context("Prayer times page returned an error status")?;

        let html = response
            .text()
            .await
            .context("Failed to read prayer times page body")?;

        tracing::debug!("Fetched page body ({} bytes)", html.len());
        Ok(html)
    }
}
