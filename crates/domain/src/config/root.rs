use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use super::cache::{CacheBackend, CacheConfig};
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::geo::GeoConfig;
use super::logging::LoggingConfig;
use super::redis::RedisConfig;
use super::search::SearchConfig;
use super::server::ServerConfig;
use super::whois::WhoisConfig;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "inforecon.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub redis: RedisConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub geo: GeoConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub whois: WhoisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub cache_backend: Option<CacheBackend>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path` (or `inforecon.toml` when present),
    /// falling back to defaults, then apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(backend) = overrides.cache_backend {
            self.cache.backend = backend;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "dns.nameservers must list at least one server".to_string(),
            ));
        }

        for server in &self.dns.nameservers {
            server.parse::<SocketAddr>().map_err(|e| {
                ConfigError::Validation(format!("Invalid nameserver '{}': {}", server, e))
            })?;
        }

        let timeouts = [
            ("cache.timeout_ms", self.cache.timeout_ms),
            ("dns.timeout_ms", self.dns.timeout_ms),
            ("geo.timeout_ms", self.geo.timeout_ms),
            ("search.timeout_ms", self.search.timeout_ms),
            ("whois.timeout_ms", self.whois.timeout_ms),
        ];
        if let Some((name, _)) = timeouts.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::Validation(format!("{} must be > 0", name)));
        }

        if self.server.max_batch_size == 0 {
            return Err(ConfigError::Validation(
                "server.max_batch_size must be > 0".to_string(),
            ));
        }

        if self.geo.window_secs == 0 || self.search.window_secs == 0 {
            return Err(ConfigError::Validation(
                "rate limit window_secs must be > 0".to_string(),
            ));
        }

        if self.cache.backend == CacheBackend::Redis && self.redis.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "redis.host is required when cache.backend = \"redis\"".to_string(),
            ));
        }

        Ok(())
    }
}
