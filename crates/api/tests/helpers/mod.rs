#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use inforecon_api::{create_api_routes, AppState};
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
use tower::ServiceExt;

// ============================================================================
// Fixed collaborators
// ============================================================================

/// `example.com` has one A and one MX record. `invalid-domain-12345.com`
/// does not exist. `flaky.example` has an A record but its TXT query fails.
/// Every other name exists without records.
struct FixedDnsSource;

#[async_trait]
impl DnsRecordSource for FixedDnsSource {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        match (domain, record_type) {
            ("invalid-domain-12345.com", _) => Err(DomainError::NxDomain(domain.to_string())),
            ("example.com", RecordType::A) => Ok(vec![DnsAnswer::A {
                host: domain.to_string(),
                addr: "93.184.216.34".parse().unwrap(),
                ttl: 300,
            }]),
            ("example.com", RecordType::MX) => Ok(vec![DnsAnswer::MX {
                exchange: "mail.example.com".to_string(),
                preference: 10,
                ttl: 300,
            }]),
            ("flaky.example", RecordType::A) => Ok(vec![DnsAnswer::A {
                host: domain.to_string(),
                addr: "192.0.2.1".parse().unwrap(),
                ttl: 300,
            }]),
            ("flaky.example", RecordType::TXT) => {
                Err(DomainError::Transport("connection reset".to_string()))
            }
            _ => Ok(vec![]),
        }
    }
}

struct FixedWhois;

#[async_trait]
impl WhoisLookup for FixedWhois {
    async fn lookup(&self, domain: &str) -> Result<Option<WhoisInfo>, DomainError> {
        match domain {
            "example.com" => Ok(Some(WhoisInfo {
                registrar: Some("Example Registrar".to_string()),
                status: vec!["active".to_string()],
                ..WhoisInfo::default()
            })),
            _ => Ok(None),
        }
    }
}

struct FixedReverse;

#[async_trait]
impl ReverseResolver for FixedReverse {
    async fn reverse_lookup(&self, _ip: IpAddr) -> Result<Option<String>, DomainError> {
        Ok(Some("dns.google".to_string()))
    }
}

#[derive(Default)]
pub struct CountingGeo {
    pub calls: AtomicUsize,
}

#[async_trait]
impl GeoLocator for CountingGeo {
    async fn locate(&self, _ip: IpAddr) -> Result<GeoAsnRecord, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GeoAsnRecord {
            geo: GeoLocation {
                country: Some("United States".to_string()),
                region: None,
                city: None,
                latitude: None,
                longitude: None,
                timezone: None,
            },
            asn: AsnInfo {
                asn: Some("AS15169".to_string()),
                isp: Some("Google LLC".to_string()),
                organization: None,
            },
        })
    }
}

struct FixedSearch;

#[async_trait]
impl SearchProvider for FixedSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        Ok(vec![SearchHit {
            title: format!("About {}", query),
            url: "https://example.com/".to_string(),
            snippet: String::new(),
        }])
    }
}

#[derive(Default)]
struct InMemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl CacheStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>, _ttl: Duration) -> Result<(), DomainError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "test"
    }
}

// ============================================================================
// App wiring
// ============================================================================

pub struct TestApp {
    pub router: Router,
    pub geo: Arc<CountingGeo>,
}

pub fn test_app(max_batch_size: usize) -> TestApp {
    let config = CacheConfig::default();
    let timeout = Duration::from_secs(5);
    let cache = Arc::new(CacheGateway::from_config(
        Arc::new(InMemoryStore::default()),
        &config,
    ));
    let geo = Arc::new(CountingGeo::default());

    let dns_adapter = Arc::new(
        DnsAdapter::new(Arc::new(FixedDnsSource), timeout)
            .with_whois(Arc::new(FixedWhois), timeout),
    );
    let ip_adapter = Arc::new(IpAdapter::new(
        Arc::new(FixedReverse),
        geo.clone(),
        Arc::new(RateLimitGate::unlimited("geo", Duration::from_secs(60))),
        timeout,
    ));
    let search_adapter = Arc::new(SearchAdapter::new(
        Arc::new(FixedSearch),
        Arc::new(RateLimitGate::unlimited("search", Duration::from_secs(30))),
        timeout,
        10,
    ));

    let get_ip_info = Arc::new(GetIpInfoUseCase::from_config(
        ip_adapter,
        cache.clone(),
        &config,
    ));

    let state = AppState {
        get_dns_info: Arc::new(GetDnsInfoUseCase::from_config(
            dns_adapter,
            cache.clone(),
            &config,
        )),
        batch_ip_info: Arc::new(BatchIpInfoUseCase::new(get_ip_info.clone())),
        get_ip_info,
        web_search: Arc::new(WebSearchUseCase::from_config(search_adapter, cache, &config)),
        max_batch_size,
        cache_backend: "test",
    };

    TestApp {
        router: create_api_routes(state),
        geo,
    }
}

// ============================================================================
// Request helpers
// ============================================================================

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> Response<Body> {
    send(
        router,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn cache_status(response: &Response<Body>) -> Option<&str> {
    header(response, "x-cache-status")
}

pub fn lookup_status(response: &Response<Body>) -> Option<&str> {
    header(response, "x-lookup-status")
}

fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}
