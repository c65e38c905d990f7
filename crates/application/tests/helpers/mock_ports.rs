#![allow(dead_code)]

use async_trait::async_trait;
use inforecon_application::adapters::{DnsAdapter, IpAdapter, SearchAdapter};
use inforecon_application::ports::{
    CacheStore, DnsAnswer, DnsRecordSource, GeoAsnRecord, GeoLocator, ReverseResolver,
    SearchProvider, WhoisLookup,
};
use inforecon_application::services::{CacheGateway, RateLimitGate};
use inforecon_application::use_cases::{
    BatchIpInfoUseCase, GetDnsInfoUseCase, GetIpInfoUseCase, WebSearchUseCase,
};
use inforecon_domain::{
    AsnInfo, CacheConfig, DomainError, GeoLocation, RecordType, SearchHit, WhoisInfo,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock DnsRecordSource
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDnsRecordSource {
    answers: Arc<RwLock<HashMap<(String, RecordType), Vec<DnsAnswer>>>>,
    failures: Arc<RwLock<HashMap<RecordType, DomainError>>>,
    nxdomain: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<Option<DomainError>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDnsRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_answers(&self, domain: &str, record_type: RecordType, answers: Vec<DnsAnswer>) {
        self.answers
            .write()
            .await
            .insert((domain.to_string(), record_type), answers);
    }

    pub async fn set_nxdomain(&self, domain: &str) {
        self.nxdomain.write().await.push(domain.to_string());
    }

    /// Fail only sub-queries of `record_type`.
    pub async fn fail_type(&self, record_type: RecordType, error: DomainError) {
        self.failures.write().await.insert(record_type, error);
    }

    pub async fn set_should_fail(&self, error: Option<DomainError>) {
        *self.should_fail.write().await = error;
    }

    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsRecordSource for MockDnsRecordSource {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = self.should_fail.read().await.clone() {
            return Err(error);
        }
        if let Some(error) = self.failures.read().await.get(&record_type).cloned() {
            return Err(error);
        }
        if self.nxdomain.read().await.iter().any(|d| d == domain) {
            return Err(DomainError::NxDomain(domain.to_string()));
        }

        Ok(self
            .answers
            .read()
            .await
            .get(&(domain.to_string(), record_type))
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock ReverseResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockReverseResolver {
    names: Arc<RwLock<HashMap<IpAddr, String>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockReverseResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_name(&self, ip: &str, hostname: &str) {
        if let Ok(addr) = ip.parse() {
            self.names.write().await.insert(addr, hostname.to_string());
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReverseResolver for MockReverseResolver {
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::QueryTimeout);
        }
        Ok(self.names.read().await.get(&ip).cloned())
    }
}

// ============================================================================
// Mock WhoisLookup
// ============================================================================

#[derive(Clone, Default)]
pub struct MockWhoisLookup {
    info: Arc<RwLock<Option<WhoisInfo>>>,
    should_fail: Arc<RwLock<Option<DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockWhoisLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_info(&self, info: Option<WhoisInfo>) {
        *self.info.write().await = info;
    }

    pub async fn set_should_fail(&self, error: Option<DomainError>) {
        *self.should_fail.write().await = error;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WhoisLookup for MockWhoisLookup {
    async fn lookup(&self, _domain: &str) -> Result<Option<WhoisInfo>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.should_fail.read().await.clone() {
            return Err(error);
        }
        Ok(self.info.read().await.clone())
    }
}

// ============================================================================
// Mock GeoLocator
// ============================================================================

#[derive(Clone, Default)]
pub struct MockGeoLocator {
    should_fail: Arc<RwLock<Option<DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockGeoLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, error: Option<DomainError>) {
        *self.should_fail.write().await = error;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn sample_geo_record() -> GeoAsnRecord {
    GeoAsnRecord {
        geo: GeoLocation {
            country: Some("United States".to_string()),
            region: Some("Virginia".to_string()),
            city: Some("Ashburn".to_string()),
            latitude: Some(39.03),
            longitude: Some(-77.5),
            timezone: Some("America/New_York".to_string()),
        },
        asn: AsnInfo {
            asn: Some("AS15169".to_string()),
            isp: Some("Google LLC".to_string()),
            organization: Some("Google Public DNS".to_string()),
        },
    }
}

#[async_trait]
impl GeoLocator for MockGeoLocator {
    async fn locate(&self, _ip: IpAddr) -> Result<GeoAsnRecord, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.should_fail.read().await.clone() {
            return Err(error);
        }
        Ok(sample_geo_record())
    }
}

// ============================================================================
// Mock SearchProvider
// ============================================================================

#[derive(Clone, Default)]
pub struct MockSearchProvider {
    hits: Arc<RwLock<Vec<SearchHit>>>,
    should_fail: Arc<RwLock<Option<DomainError>>>,
    last_query: Arc<RwLock<Option<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockSearchProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_hits(&self, count: usize) {
        *self.hits.write().await = (0..count)
            .map(|i| SearchHit {
                title: format!("Result {}", i),
                url: format!("https://example.com/{}", i),
                snippet: format!("snippet {}", i),
            })
            .collect();
    }

    pub async fn set_should_fail(&self, error: Option<DomainError>) {
        *self.should_fail.write().await = error;
    }

    pub async fn last_query(&self) -> Option<String> {
        self.last_query.read().await.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.write().await = Some(query.to_string());
        if let Some(error) = self.should_fail.read().await.clone() {
            return Err(error);
        }
        Ok(self.hits.read().await.clone())
    }
}

// ============================================================================
// Mock CacheStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, (Vec<u8>, Duration)>>>,
    should_fail: Arc<RwLock<bool>>,
    sets: Arc<AtomicUsize>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn insert_raw(&self, key: &str, value: &[u8]) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.to_vec(), Duration::from_secs(60)));
    }

    pub async fn get_raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().await.get(key).map(|(v, _)| v.clone())
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.entries.read().await.get(key).map(|(_, ttl)| *ttl)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Cache("connection refused".to_string()));
        }
        Ok(self.entries.read().await.get(key).map(|(v, _)| v.clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), DomainError> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::Cache("connection refused".to_string()));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value, ttl));
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

// ============================================================================
// Harness wiring every use case over the mocks
// ============================================================================

pub const ADAPTER_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Harness {
    pub dns_source: MockDnsRecordSource,
    pub whois: MockWhoisLookup,
    pub reverse: MockReverseResolver,
    pub geo: MockGeoLocator,
    pub search: MockSearchProvider,
    pub store: MockCacheStore,
    pub geo_gate: Arc<RateLimitGate>,
    pub dns: GetDnsInfoUseCase,
    pub ip: Arc<GetIpInfoUseCase>,
    pub batch: BatchIpInfoUseCase,
    pub web_search: WebSearchUseCase,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default(), 45)
    }

    pub fn with_config(config: CacheConfig, geo_requests_per_window: u32) -> Self {
        let dns_source = MockDnsRecordSource::new();
        let whois = MockWhoisLookup::new();
        let reverse = MockReverseResolver::new();
        let geo = MockGeoLocator::new();
        let search = MockSearchProvider::new();
        let store = MockCacheStore::new();

        let cache = Arc::new(CacheGateway::from_config(
            Arc::new(store.clone()),
            &config,
        ));
        let geo_gate = Arc::new(RateLimitGate::new(
            "geo",
            geo_requests_per_window,
            Duration::from_secs(60),
            Duration::from_secs(60),
        ));
        let search_gate = Arc::new(RateLimitGate::unlimited("search", Duration::from_secs(30)));

        let dns_adapter = Arc::new(
            DnsAdapter::new(Arc::new(dns_source.clone()), ADAPTER_TIMEOUT)
                .with_whois(Arc::new(whois.clone()), ADAPTER_TIMEOUT),
        );
        let ip_adapter = Arc::new(IpAdapter::new(
            Arc::new(reverse.clone()),
            Arc::new(geo.clone()),
            geo_gate.clone(),
            ADAPTER_TIMEOUT,
        ));
        let search_adapter = Arc::new(SearchAdapter::new(
            Arc::new(search.clone()),
            search_gate,
            ADAPTER_TIMEOUT,
            5,
        ));

        let ip = Arc::new(GetIpInfoUseCase::from_config(
            ip_adapter,
            cache.clone(),
            &config,
        ));

        Self {
            dns: GetDnsInfoUseCase::from_config(dns_adapter, cache.clone(), &config),
            batch: BatchIpInfoUseCase::new(ip.clone()),
            web_search: WebSearchUseCase::from_config(search_adapter, cache, &config),
            ip,
            dns_source,
            whois,
            reverse,
            geo,
            search,
            store,
            geo_gate,
        }
    }
}

pub fn a_answer(host: &str, ip: &str) -> DnsAnswer {
    DnsAnswer::A {
        host: host.to_string(),
        addr: ip.parse().unwrap(),
        ttl: 300,
    }
}

pub fn mx_answer(exchange: &str, preference: u16) -> DnsAnswer {
    DnsAnswer::MX {
        exchange: exchange.to_string(),
        preference,
        ttl: 300,
    }
}
