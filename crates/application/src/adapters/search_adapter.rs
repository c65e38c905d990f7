use inforecon_domain::{DomainError, Failure, Outcome, SearchHit};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::ports::SearchProvider;
use crate::services::RateLimitGate;

pub struct SearchAdapter {
    provider: Arc<dyn SearchProvider>,
    gate: Arc<RateLimitGate>,
    timeout: Duration,
    max_results: usize,
}

impl SearchAdapter {
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        gate: Arc<RateLimitGate>,
        timeout: Duration,
        max_results: usize,
    ) -> Self {
        Self {
            provider,
            gate,
            timeout,
            max_results,
        }
    }

    /// Hits in upstream order, at most `max_results` of them.
    pub async fn resolve(&self, query: &str) -> Outcome<Vec<SearchHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Failure::from(DomainError::InvalidQuery(
                "search query must not be empty".to_string(),
            )));
        }

        if let Err(wait) = self.gate.try_acquire() {
            debug!(gate = self.gate.name(), "Search call refused by rate-limit gate");
            return Err(Failure::from(DomainError::RateLimited {
                retry_after: Some(wait),
            }));
        }

        let result = tokio::time::timeout(self.timeout, self.provider.search(query))
            .await
            .map_err(|_| DomainError::QueryTimeout)
            .and_then(|result| result);

        match result {
            Ok(mut hits) => {
                hits.truncate(self.max_results);
                debug!(query = %query, hits = hits.len(), "Search completed");
                Ok(hits)
            }
            Err(e) => {
                if let DomainError::RateLimited { retry_after } = &e {
                    self.gate.trip(*retry_after);
                }
                warn!(query = %query, error = %e, "Search failed");
                Err(Failure::from(e))
            }
        }
    }
}
