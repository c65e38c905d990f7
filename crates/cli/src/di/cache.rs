use inforecon_application::ports::CacheStore;
use inforecon_domain::{CacheBackend, Config};
use inforecon_infrastructure::cache::{MemoryCacheStore, RedisCacheStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Redis when configured and reachable, the in-process store otherwise.
pub async fn build_cache_store(config: &Config) -> Arc<dyn CacheStore> {
    if config.cache.backend == CacheBackend::Redis {
        match RedisCacheStore::connect(&config.redis).await {
            Ok(store) => return Arc::new(store),
            Err(e) => {
                warn!(error = %e, "Redis unavailable, falling back to in-memory cache");
            }
        }
    }

    info!("Using in-memory cache");
    Arc::new(MemoryCacheStore::new())
}
