use async_trait::async_trait;
use inforecon_domain::{DomainError, WhoisInfo};

#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Registration data of `domain`, `None` when the registry has no record.
    async fn lookup(&self, domain: &str) -> Result<Option<WhoisInfo>, DomainError>;
}
