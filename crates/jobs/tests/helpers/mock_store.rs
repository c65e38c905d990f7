#![allow(dead_code)]

use async_trait::async_trait;
use inforecon_application::ports::CacheStore;
use inforecon_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Store that only counts sweeps.
#[derive(Clone, Default)]
pub struct MockSweepableStore {
    sweeps: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockSweepableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sweeps(&self) -> usize {
        self.sweeps.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CacheStore for MockSweepableStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), DomainError> {
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        self.sweeps.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Cache("sweep failed".to_string()));
        }
        Ok(1)
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
