use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Registration data lookups (RDAP), attached to full DNS lookups
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoisConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// RDAP bootstrap service; redirects to the authoritative registry
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl WhoisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://rdap.org".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}
