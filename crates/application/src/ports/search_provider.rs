use async_trait::async_trait;
use inforecon_domain::{DomainError, SearchHit};

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Hits in upstream ranking order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DomainError>;
}
