mod cache_store;
mod dns_record_source;
mod geo_locator;
mod reverse_resolver;
mod search_provider;
mod whois_lookup;

pub use cache_store::CacheStore;
pub use dns_record_source::{DnsAnswer, DnsRecordSource};
pub use geo_locator::{GeoAsnRecord, GeoLocator};
pub use reverse_resolver::ReverseResolver;
pub use search_provider::SearchProvider;
pub use whois_lookup::WhoisLookup;
