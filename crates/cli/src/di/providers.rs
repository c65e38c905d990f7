use inforecon_application::ports::{
    DnsRecordSource, GeoLocator, ReverseResolver, SearchProvider, WhoisLookup,
};
use inforecon_application::services::RateLimitGate;
use inforecon_domain::Config;
use inforecon_infrastructure::dns::{ForwardingRecordSource, PtrReverseResolver};
use inforecon_infrastructure::geo::IpApiGeoLocator;
use inforecon_infrastructure::search::SearxngSearchProvider;
use inforecon_infrastructure::whois::RdapWhoisClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Upstream clients plus the shared per-service rate limit gates.
pub struct Providers {
    pub dns_source: Arc<dyn DnsRecordSource>,
    pub reverse: Arc<dyn ReverseResolver>,
    pub geo: Arc<dyn GeoLocator>,
    pub search: Arc<dyn SearchProvider>,
    pub whois: Option<Arc<dyn WhoisLookup>>,
    pub geo_gate: Arc<RateLimitGate>,
    pub search_gate: Arc<RateLimitGate>,
}

impl Providers {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let dns_source: Arc<dyn DnsRecordSource> =
            Arc::new(ForwardingRecordSource::from_config(&config.dns)?);
        let reverse = Arc::new(PtrReverseResolver::new(dns_source.clone()));
        let geo = Arc::new(IpApiGeoLocator::from_config(&config.geo)?);
        let search = Arc::new(SearxngSearchProvider::from_config(&config.search)?);
        let whois: Option<Arc<dyn WhoisLookup>> = if config.whois.enabled {
            Some(Arc::new(RdapWhoisClient::from_config(&config.whois)?))
        } else {
            None
        };

        let geo_gate = Arc::new(RateLimitGate::new(
            "geo",
            config.geo.requests_per_window,
            Duration::from_secs(config.geo.window_secs),
            Duration::from_secs(config.geo.backoff_secs),
        ));
        let search_gate = Arc::new(RateLimitGate::new(
            "search",
            config.search.requests_per_window,
            Duration::from_secs(config.search.window_secs),
            Duration::from_secs(config.search.backoff_secs),
        ));

        info!(
            nameservers = ?config.dns.nameservers,
            geo = %config.geo.base_url,
            search = %config.search.base_url,
            whois = config.whois.enabled,
            "Upstream providers configured"
        );

        Ok(Self {
            dns_source,
            reverse,
            geo,
            search,
            whois,
            geo_gate,
            search_gate,
        })
    }
}
