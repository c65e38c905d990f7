use inforecon_domain::{normalize_subject, CacheConfig, QueryNamespace, SearchResult};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::adapters::SearchAdapter;
use crate::services::{CacheGateway, CachePolicy};
use crate::use_cases::Resolved;

const NAMESPACE: QueryNamespace = QueryNamespace::Search;

pub struct WebSearchUseCase {
    adapter: Arc<SearchAdapter>,
    cache: Arc<CacheGateway>,
    policy: CachePolicy,
}

impl WebSearchUseCase {
    pub fn new(adapter: Arc<SearchAdapter>, cache: Arc<CacheGateway>, policy: CachePolicy) -> Self {
        Self {
            adapter,
            cache,
            policy,
        }
    }

    pub fn from_config(
        adapter: Arc<SearchAdapter>,
        cache: Arc<CacheGateway>,
        config: &CacheConfig,
    ) -> Self {
        Self::new(adapter, cache, CachePolicy::for_namespace(config, NAMESPACE))
    }

    /// The returned `query` is the normalized form used as cache key.
    #[instrument(skip(self))]
    pub async fn execute(&self, query: &str) -> Resolved<SearchResult> {
        let key = normalize_subject(query);

        if let Some(result) = self.cache.lookup::<SearchResult>(NAMESPACE, &key).await {
            return Resolved::hit(result);
        }

        let (result, failure) = match self.adapter.resolve(&key).await {
            Ok(hits) => (SearchResult::new(&key, hits), None),
            Err(failure) => {
                warn!(query = %key, error = %failure, "Search failed");
                (SearchResult::failed(&key, failure.message), Some(failure.class))
            }
        };

        match self.policy.ttl_for(failure) {
            Some(ttl) => self.cache.store(NAMESPACE, &key, &result, ttl).await,
            None => debug!(query = %key, "Result not cacheable"),
        }

        Resolved::miss(result)
    }
}
