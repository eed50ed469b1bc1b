//! Web search client backing the Search Gateway.
//!
//! Talks to a Brave-style web search API: `GET {url}?q=..&count=N` with the key in
//! `X-Subscription-Token`, results under `web.results[]`.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Hits requested from the upstream per query.
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API key environment variable '{0}' is not set")]
    MissingApiKey(String),
}

/// A single ranked search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    web: Option<WebResults>,
}

#[derive(Debug, Deserialize)]
struct WebResults {
    #[serde(default)]
    results: Vec<WebResult>,
}

#[derive(Debug, Deserialize)]
struct WebResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    url: String,
    api_key_var: String,
}

impl SearchClient {
    pub fn new(
        url: impl Into<String>,
        api_key_var: impl Into<String>,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("jobprep-api/", env!("CARGO_PKG_VERSION")))
                .build()?,
            url: url.into(),
            api_key_var: api_key_var.into(),
        })
    }

    /// Runs one query and returns at most `MAX_RESULTS` hits in upstream rank order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let api_key = std::env::var(&self.api_key_var)
            .map_err(|_| SearchError::MissingApiKey(self.api_key_var.clone()))?;

        let count = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[("q", query), ("count", count.as_str())])
            .header("Accept", "application/json")
            .header("X-Subscription-Token", api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Search API returned {}: {}", status, message);
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        let hits: Vec<SearchHit> = parsed
            .web
            .map(|w| w.results)
            .unwrap_or_default()
            .into_iter()
            .take(MAX_RESULTS)
            .map(|r| SearchHit {
                title: r.title,
                snippet: r.description,
            })
            .collect();

        debug!("Search for {:?} returned {} hits", query, hits.len());
        Ok(hits)
    }
}
