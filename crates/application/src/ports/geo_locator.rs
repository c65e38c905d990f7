use async_trait::async_trait;
use inforecon_domain::{AsnInfo, DomainError, GeoLocation};
use std::net::IpAddr;

/// Geolocation and ASN data from a single upstream call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoAsnRecord {
    pub geo: GeoLocation,
    pub asn: AsnInfo,
}

#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Look up a public address. Implementations report quota exhaustion as
    /// `DomainError::RateLimited`, with the upstream's retry hint when known.
    async fn locate(&self, ip: IpAddr) -> Result<GeoAsnRecord, DomainError>;
}
