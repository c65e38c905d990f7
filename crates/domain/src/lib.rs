//! InfoRecon Domain Layer
pub mod config;
pub mod dns_info;
pub mod dns_record;
pub mod errors;
pub mod ip_info;
pub mod private_range;
pub mod query;
pub mod search_result;
pub mod whois_info;

pub use config::{CacheBackend, CacheConfig, CliOverrides, Config, ConfigError};
pub use dns_info::{DnsInfo, WHOIS_SECTION};
pub use dns_record::{AAAARecord, ARecord, CNAMERecord, MXRecord, NSRecord, RecordType, TXTRecord};
pub use errors::{DomainError, ErrorClass, Failure, Outcome};
pub use ip_info::{AsnInfo, GeoLocation, IpInfo};
pub use private_range::PrivateRangeFilter;
pub use query::{normalize_domain, normalize_ip, normalize_subject, QueryNamespace};
pub use search_result::{SearchHit, SearchResult};
pub use whois_info::WhoisInfo;
