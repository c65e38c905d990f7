use async_trait::async_trait;
use inforecon_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// PTR lookup. `Ok(None)` when the address has no reverse record.
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Option<String>, DomainError>;
}
