use inforecon_application::adapters::{DnsAdapter, IpAdapter, SearchAdapter};
use inforecon_application::ports::CacheStore;
use inforecon_application::services::CacheGateway;
use inforecon_application::use_cases::{
    BatchIpInfoUseCase, GetDnsInfoUseCase, GetIpInfoUseCase, WebSearchUseCase,
};
use inforecon_domain::Config;
use std::sync::Arc;

use super::Providers;

pub struct UseCases {
    pub get_dns_info: Arc<GetDnsInfoUseCase>,
    pub get_ip_info: Arc<GetIpInfoUseCase>,
    pub batch_ip_info: Arc<BatchIpInfoUseCase>,
    pub web_search: Arc<WebSearchUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, store: Arc<dyn CacheStore>, providers: Providers) -> Self {
        let cache = Arc::new(CacheGateway::from_config(store, &config.cache));

        // Each sub-query may walk the whole nameserver list before giving up.
        let dns_timeout = config.dns.timeout() * config.dns.nameservers.len().max(1) as u32;
        let mut dns_adapter = DnsAdapter::new(providers.dns_source, dns_timeout);
        if let Some(whois) = providers.whois {
            dns_adapter = dns_adapter.with_whois(whois, config.whois.timeout());
        }
        let dns_adapter = Arc::new(dns_adapter);
        let ip_adapter = Arc::new(IpAdapter::new(
            providers.reverse,
            providers.geo,
            providers.geo_gate,
            config.geo.timeout(),
        ));
        let search_adapter = Arc::new(SearchAdapter::new(
            providers.search,
            providers.search_gate,
            config.search.timeout(),
            config.search.max_results,
        ));

        let get_ip_info = Arc::new(GetIpInfoUseCase::from_config(
            ip_adapter,
            cache.clone(),
            &config.cache,
        ));

        Self {
            get_dns_info: Arc::new(GetDnsInfoUseCase::from_config(
                dns_adapter,
                cache.clone(),
                &config.cache,
            )),
            batch_ip_info: Arc::new(BatchIpInfoUseCase::new(get_ip_info.clone())),
            get_ip_info,
            web_search: Arc::new(WebSearchUseCase::from_config(
                search_adapter,
                cache,
                &config.cache,
            )),
        }
    }
}
