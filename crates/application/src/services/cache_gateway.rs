use chrono::{DateTime, Utc};
use inforecon_domain::{CacheConfig, ErrorClass, QueryNamespace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::ports::CacheStore;

/// Stored payload. `query` is kept for operators inspecting the store.
#[derive(Debug, Deserialize)]
struct CacheEnvelope<T> {
    cached_at: DateTime<Utc>,
    #[allow(dead_code)]
    query: String,
    result: T,
}

#[derive(Serialize)]
struct CacheEnvelopeRef<'a, T> {
    cached_at: DateTime<Utc>,
    query: &'a str,
    result: &'a T,
}

/// Namespaced, fail-soft front of a [`CacheStore`].
///
/// A failing or slow store never fails a query: lookups degrade to a miss and
/// writes are logged and dropped. Every round-trip is bounded by `timeout`.
pub struct CacheGateway {
    store: Arc<dyn CacheStore>,
    key_prefix: String,
    timeout: Duration,
}

impl CacheGateway {
    pub fn new(store: Arc<dyn CacheStore>, key_prefix: impl Into<String>, timeout: Duration) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
            timeout,
        }
    }

    pub fn from_config(store: Arc<dyn CacheStore>, config: &CacheConfig) -> Self {
        Self::new(store, config.key_prefix.clone(), config.timeout())
    }

    pub fn key(&self, namespace: QueryNamespace, normalized_key: &str) -> String {
        format!("{}:{}:{}", self.key_prefix, namespace, normalized_key)
    }

    pub async fn lookup<T: DeserializeOwned>(
        &self,
        namespace: QueryNamespace,
        normalized_key: &str,
    ) -> Option<T> {
        let key = self.key(namespace, normalized_key);

        let bytes = match tokio::time::timeout(self.timeout, self.store.get(&key)).await {
            Ok(Ok(Some(bytes))) => bytes,
            Ok(Ok(None)) => {
                debug!(key = %key, "Cache MISS");
                return None;
            }
            Ok(Err(e)) => {
                warn!(key = %key, error = %e, "Cache lookup failed, querying live");
                return None;
            }
            Err(_) => {
                warn!(
                    key = %key,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Cache lookup timed out, querying live"
                );
                return None;
            }
        };

        match serde_json::from_slice::<CacheEnvelope<T>>(&bytes) {
            Ok(envelope) => {
                debug!(key = %key, cached_at = %envelope.cached_at, "Cache HIT");
                Some(envelope.result)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    pub async fn store<T: Serialize>(
        &self,
        namespace: QueryNamespace,
        normalized_key: &str,
        value: &T,
        ttl: Duration,
    ) {
        let key = self.key(namespace, normalized_key);

        let envelope = CacheEnvelopeRef {
            cached_at: Utc::now(),
            query: normalized_key,
            result: value,
        };
        let bytes = match serde_json::to_vec(&envelope) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize cache entry");
                return;
            }
        };

        match tokio::time::timeout(self.timeout, self.store.set(&key, bytes, ttl)).await {
            Ok(Ok(())) => {
                debug!(key = %key, ttl_secs = ttl.as_secs(), "Cache STORED");
            }
            Ok(Err(e)) => {
                warn!(key = %key, error = %e, "Cache store failed, result not cached");
            }
            Err(_) => {
                warn!(key = %key, "Cache store timed out, result not cached");
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }
}

/// Per-namespace TTL policy.
///
/// The only place that turns an error classification into a caching decision.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    positive_ttl: Duration,
    negative_ttl: Duration,
}

impl CachePolicy {
    pub fn new(positive_ttl: Duration, negative_ttl: Duration) -> Self {
        Self {
            positive_ttl,
            negative_ttl: negative_ttl.min(positive_ttl),
        }
    }

    pub fn for_namespace(config: &CacheConfig, namespace: QueryNamespace) -> Self {
        Self::new(
            config.ttl_for(namespace),
            config.negative_ttl_for(namespace),
        )
    }

    /// TTL for a result, `None` when it must not be cached.
    ///
    /// * success: the namespace TTL
    /// * permanent failure: the short negative TTL
    /// * transient / rate-limited failure: never cached
    pub fn ttl_for(&self, failure: Option<ErrorClass>) -> Option<Duration> {
        let ttl = match failure {
            None => self.positive_ttl,
            Some(class) if class.is_cacheable() => self.negative_ttl,
            Some(_) => return None,
        };
        (!ttl.is_zero()).then_some(ttl)
    }
}
