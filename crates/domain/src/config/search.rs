use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Web search service (SearXNG JSON API compatible)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Hits kept per query, in upstream ranking order
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_requests_per_window")]
    pub requests_per_window: u32,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    #[serde(default = "default_backoff_secs")]
    pub backoff_secs: u64,
}

impl SearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_results: default_max_results(),
            requests_per_window: default_requests_per_window(),
            window_secs: default_window_secs(),
            backoff_secs: default_backoff_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8888".to_string()
}

fn default_timeout_ms() -> u64 {
    7000
}

fn default_max_results() -> usize {
    10
}

fn default_requests_per_window() -> u32 {
    60
}

fn default_window_secs() -> u64 {
    60
}

fn default_backoff_secs() -> u64 {
    30
}
