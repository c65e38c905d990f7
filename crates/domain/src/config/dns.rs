use serde::{Deserialize, Serialize};
use std::time::Duration;

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Nameservers tried in order, "ip:port"
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<String>,

    /// Per sub-query timeout (milliseconds)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl DnsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameservers: default_nameservers(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_nameservers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_timeout_ms() -> u64 {
    5000
}
