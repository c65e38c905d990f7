use inforecon_application::ports::CacheStore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Periodically drops expired entries from a cache store that does not
/// expire keys on its own.
pub struct CacheSweepJob {
    store: Arc<dyn CacheStore>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            interval_secs: 60,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            backend = self.store.backend_name(),
            interval_secs = self.interval_secs,
            "Starting cache sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.store.purge_expired().await {
                            Ok(0) => {}
                            Ok(removed) => {
                                debug!(removed, "Cache sweep completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Cache sweep failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
