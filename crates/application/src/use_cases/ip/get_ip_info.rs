use inforecon_domain::{normalize_ip, CacheConfig, IpInfo, QueryNamespace};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::adapters::IpAdapter;
use crate::services::{CacheGateway, CachePolicy};
use crate::use_cases::Resolved;

const NAMESPACE: QueryNamespace = QueryNamespace::Ip;

pub struct GetIpInfoUseCase {
    adapter: Arc<IpAdapter>,
    cache: Arc<CacheGateway>,
    policy: CachePolicy,
}

impl GetIpInfoUseCase {
    pub fn new(adapter: Arc<IpAdapter>, cache: Arc<CacheGateway>, policy: CachePolicy) -> Self {
        Self {
            adapter,
            cache,
            policy,
        }
    }

    pub fn from_config(
        adapter: Arc<IpAdapter>,
        cache: Arc<CacheGateway>,
        config: &CacheConfig,
    ) -> Self {
        Self::new(adapter, cache, CachePolicy::for_namespace(config, NAMESPACE))
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, ip: &str) -> Resolved<IpInfo> {
        let key = normalize_ip(ip);

        if let Some(info) = self.cache.lookup::<IpInfo>(NAMESPACE, &key).await {
            return Resolved::hit(info);
        }

        let (info, failure) = match self.adapter.resolve(&key).await {
            Ok(info) => (info, None),
            Err(failure) => {
                warn!(ip = %key, error = %failure, "IP lookup failed");
                (IpInfo::failed(&key, failure.message), Some(failure.class))
            }
        };

        match self.policy.ttl_for(failure) {
            Some(ttl) => self.cache.store(NAMESPACE, &key, &info, ttl).await,
            None => debug!(ip = %key, "Result not cacheable"),
        }

        Resolved::miss(info)
    }
}
