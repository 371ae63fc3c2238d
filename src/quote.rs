use serde::Deserialize;
use tracing::debug;

use crate::config::QuoteConfig;
use crate::error::{http_error, FetchError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

/// `Author once said: "Quote"`
pub fn format_quote(quote: &Quote) -> String {
    format!("{} once said: \"{}\"", quote.author, quote.quote)
}

/// Client for the API Ninjas quotes endpoint
pub struct QuoteClient {
    client: reqwest::Client,
    config: QuoteConfig,
}

impl QuoteClient {
    pub fn new(client: reqwest::Client, config: QuoteConfig) -> Self {
        Self { client, config }
    }

    /// Fetches one quote and formats it with its attribution.
    pub async fn fetch(&self) -> Result<String, FetchError> {
        if self.config.api_key.is_empty() {
            return Err(FetchError::Config(
                "quote API key not configured".to_string(),
            ));
        }

        let url = format!("{}/quotes", self.config.effective_base_url());
        debug!("Requesting quote: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.config.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        let body = response.text().await?;
        let quotes: Vec<Quote> = serde_json::from_str(&body)?;

        // Only the first quote is used; the API may return more.
        quotes
            .first()
            .map(format_quote)
            .ok_or_else(|| FetchError::EmptyResult("no quotes received".to_string()))
    }
}
