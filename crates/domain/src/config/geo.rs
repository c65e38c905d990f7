use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Geolocation / ASN service (ip-api.com compatible)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Upstream quota: requests allowed per window (ip-api.com free tier: 45/min)
    #[serde(default = "default_requests_per_window")]
    pub requests_per_window: u32,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Pause after the upstream reports a rate limit
    #[serde(default = "default_backoff_secs")]
    pub backoff_secs: u64,
}

impl GeoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            requests_per_window: default_requests_per_window(),
            window_secs: default_window_secs(),
            backoff_secs: default_backoff_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://ip-api.com/json".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_requests_per_window() -> u32 {
    45
}

fn default_window_secs() -> u64 {
    60
}

fn default_backoff_secs() -> u64 {
    60
}
