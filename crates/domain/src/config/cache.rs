use crate::query::QueryNamespace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Redis,
    #[default]
    Memory,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" => Ok(CacheBackend::Memory),
            other => Err(format!("unknown cache backend: {}", other)),
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheBackend::Redis => write!(f, "redis"),
            CacheBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Cache policy. TTLs are in seconds; a namespace TTL of 0 disables caching
/// for that namespace.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,

    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Bound on every cache round-trip (milliseconds)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_long_ttl")]
    pub dns_ttl: u64,

    #[serde(default = "default_long_ttl")]
    pub ip_ttl: u64,

    #[serde(default = "default_search_ttl")]
    pub search_ttl: u64,

    /// TTL for permanent failures (NXDOMAIN, invalid input)
    #[serde(default = "default_negative_ttl")]
    pub negative_ttl: u64,

    /// Memory backend only: how often expired entries are purged
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl CacheConfig {
    pub fn ttl_for(&self, namespace: QueryNamespace) -> Duration {
        let secs = match namespace {
            QueryNamespace::Dns => self.dns_ttl,
            QueryNamespace::Ip => self.ip_ttl,
            QueryNamespace::Search => self.search_ttl,
        };
        Duration::from_secs(secs)
    }

    /// Negative TTL, never longer than the namespace's positive TTL.
    pub fn negative_ttl_for(&self, namespace: QueryNamespace) -> Duration {
        Duration::from_secs(self.negative_ttl).min(self.ttl_for(namespace))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            key_prefix: default_key_prefix(),
            timeout_ms: default_timeout_ms(),
            dns_ttl: default_long_ttl(),
            ip_ttl: default_long_ttl(),
            search_ttl: default_search_ttl(),
            negative_ttl: default_negative_ttl(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_key_prefix() -> String {
    "inforecon".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

// 7 days
fn default_long_ttl() -> u64 {
    7 * 24 * 60 * 60
}

fn default_search_ttl() -> u64 {
    3600
}

fn default_negative_ttl() -> u64 {
    300
}

fn default_sweep_interval_secs() -> u64 {
    60
}
