use async_trait::async_trait;
use inforecon_application::ports::SearchProvider;
use inforecon_domain::config::SearchConfig;
use inforecon_domain::{DomainError, SearchHit};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::http::{build_client, classify_status, request_error, retry_after};

const SERVICE: &str = "searxng";

#[derive(Debug, Deserialize)]
struct SearxngResponse {
    #[serde(default)]
    results: Vec<SearxngResult>,
}

#[derive(Debug, Deserialize)]
struct SearxngResult {
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    content: Option<String>,
}

/// Client for a SearXNG instance's JSON API (`format=json` must be enabled
/// in the instance settings).
pub struct SearxngSearchProvider {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl SearxngSearchProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(concat!("inforecon/", env!("CARGO_PKG_VERSION")))?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self, DomainError> {
        Self::new(config.base_url.clone(), config.timeout())
    }
}

#[async_trait]
impl SearchProvider for SearxngSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("format", "json")])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| request_error(SERVICE, e))?;

        let hint = retry_after(response.headers());
        classify_status(SERVICE, response.status(), hint)?;

        let body = response
            .text()
            .await
            .map_err(|e| request_error(SERVICE, e))?;

        let hits = parse_response(&body)?;
        debug!(query = %query, hits = hits.len(), "SearXNG response received");
        Ok(hits)
    }
}

fn parse_response(body: &str) -> Result<Vec<SearchHit>, DomainError> {
    let parsed: SearxngResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Serialization(format!("Invalid SearXNG response: {}", e)))?;

    Ok(parsed
        .results
        .into_iter()
        .map(|r| SearchHit {
            title: r.title,
            url: r.url,
            snippet: r.content.unwrap_or_default(),
        })
        .collect())
}
