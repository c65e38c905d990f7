use async_trait::async_trait;
use inforecon_domain::DomainError;
use std::time::Duration;

/// Key/value store with per-entry expiry, backed by a shared cache service.
///
/// Keys arrive fully built (`prefix:namespace:normalized`); values are opaque
/// bytes. Expiry is enforced by the backing store's own clock.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns `Ok(None)` for a missing or expired key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;

    /// Overwrites any existing value for `key`.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), DomainError>;

    /// Drop expired entries, returning how many were removed. Stores whose
    /// backend expires keys on its own keep the default.
    async fn purge_expired(&self) -> Result<usize, DomainError> {
        Ok(0)
    }

    fn backend_name(&self) -> &'static str;
}
