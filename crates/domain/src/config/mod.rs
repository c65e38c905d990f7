//! Configuration module for InfoRecon
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, file loading and CLI overrides
//! - `server`: HTTP binding and request limits
//! - `cache`: Cache backend, per-namespace TTLs and timeouts
//! - `redis`: Redis connection settings
//! - `dns`: Nameservers and DNS timeout
//! - `geo`: Geolocation service endpoint and rate limit
//! - `search`: Search service endpoint and rate limit
//! - `whois`: Registration data (RDAP) lookups
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod dns;
pub mod errors;
pub mod geo;
pub mod logging;
pub mod redis;
pub mod root;
pub mod search;
pub mod server;
pub mod whois;

pub use cache::{CacheBackend, CacheConfig};
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use geo::GeoConfig;
pub use logging::LoggingConfig;
pub use redis::RedisConfig;
pub use root::{CliOverrides, Config};
pub use search::SearchConfig;
pub use server::ServerConfig;
pub use whois::WhoisConfig;
