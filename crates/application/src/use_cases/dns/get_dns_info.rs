use inforecon_domain::{
    normalize_domain, CacheConfig, DnsInfo, ErrorClass, QueryNamespace, RecordType, WHOIS_SECTION,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::adapters::DnsAdapter;
use crate::services::{CacheGateway, CachePolicy};
use crate::use_cases::Resolved;

const NAMESPACE: QueryNamespace = QueryNamespace::Dns;

pub struct GetDnsInfoUseCase {
    adapter: Arc<DnsAdapter>,
    cache: Arc<CacheGateway>,
    policy: CachePolicy,
}

impl GetDnsInfoUseCase {
    pub fn new(adapter: Arc<DnsAdapter>, cache: Arc<CacheGateway>, policy: CachePolicy) -> Self {
        Self {
            adapter,
            cache,
            policy,
        }
    }

    pub fn from_config(
        adapter: Arc<DnsAdapter>,
        cache: Arc<CacheGateway>,
        config: &CacheConfig,
    ) -> Self {
        Self::new(adapter, cache, CachePolicy::for_namespace(config, NAMESPACE))
    }

    /// Full record set for `domain`. Never fails: errors are reported in
    /// `DnsInfo::error`. A result missing record types is returned uncached and
    /// flagged `partial`.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Resolved<DnsInfo> {
        let key = normalize_domain(domain);

        if let Some(info) = self.cache.lookup::<DnsInfo>(NAMESPACE, &key).await {
            return Resolved::hit(info);
        }

        let (info, failure) = match self.adapter.resolve(&key).await {
            Ok(lookup) if lookup.complete => (lookup.info, None),
            Ok(lookup) => {
                warn!(domain = %key, "Returning incomplete DNS result");
                (lookup.info, Some(ErrorClass::Transient))
            }
            Err(failure) => {
                warn!(domain = %key, error = %failure, "DNS lookup failed");
                (DnsInfo::failed(&key, failure.message), Some(failure.class))
            }
        };

        match self.policy.ttl_for(failure) {
            Some(ttl) => self.cache.store(NAMESPACE, &key, &info, ttl).await,
            None => debug!(domain = %key, "Result not cacheable"),
        }

        let partial = failure == Some(ErrorClass::Transient) && !info.is_error();
        Resolved::miss(info).with_partial(partial)
    }

    /// Only the records of `record_type` (case-insensitive name), or only the
    /// registration data for `WHOIS`. Served from the full entry: a hit is
    /// filtered, a miss resolves and stores the full entry first.
    #[instrument(skip(self))]
    pub async fn execute_by_type(&self, domain: &str, record_type: &str) -> Resolved<DnsInfo> {
        if record_type.trim().eq_ignore_ascii_case(WHOIS_SECTION) {
            return self.execute(domain).await.map(|info| info.whois_only());
        }

        let parsed = record_type
            .parse::<RecordType>()
            .ok()
            .filter(|t| RecordType::FULL_LOOKUP.contains(t));

        match parsed {
            Some(record_type) => self
                .execute(domain)
                .await
                .map(|info| info.filtered(record_type)),
            None => Resolved::miss(DnsInfo::failed(
                normalize_domain(domain),
                format!(
                    "unsupported record type: {}",
                    record_type.trim().to_uppercase()
                ),
            )),
        }
    }
}
