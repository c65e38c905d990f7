//! Resolver adapters: wrap one collaborator each, bound every call with a
//! timeout and turn collaborator errors into a classified [`Failure`].
//!
//! [`Failure`]: inforecon_domain::Failure
mod dns_adapter;
mod ip_adapter;
mod search_adapter;

pub use dns_adapter::{DnsAdapter, DnsLookup};
pub use ip_adapter::IpAdapter;
pub use search_adapter::SearchAdapter;
