use async_trait::async_trait;
use inforecon_domain::{DomainError, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// One answer record returned by the resolver, already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsAnswer {
    A {
        host: String,
        addr: Ipv4Addr,
        ttl: u32,
    },
    AAAA {
        host: String,
        addr: Ipv6Addr,
        ttl: u32,
    },
    CNAME {
        host: String,
        target: String,
        ttl: u32,
    },
    MX {
        exchange: String,
        preference: u16,
        ttl: u32,
    },
    NS {
        host: String,
        nameserver: String,
        ttl: u32,
    },
    TXT {
        host: String,
        text: String,
        ttl: u32,
    },
    PTR {
        host: String,
        target: String,
        ttl: u32,
    },
}

impl DnsAnswer {
    pub fn record_type(&self) -> RecordType {
        match self {
            DnsAnswer::A { .. } => RecordType::A,
            DnsAnswer::AAAA { .. } => RecordType::AAAA,
            DnsAnswer::CNAME { .. } => RecordType::CNAME,
            DnsAnswer::MX { .. } => RecordType::MX,
            DnsAnswer::NS { .. } => RecordType::NS,
            DnsAnswer::TXT { .. } => RecordType::TXT,
            DnsAnswer::PTR { .. } => RecordType::PTR,
        }
    }
}

/// DNS resolution library contract: one record type per call.
#[async_trait]
pub trait DnsRecordSource: Send + Sync {
    /// Resolve `record_type` for `domain`.
    ///
    /// * `Ok(vec![])` - the name exists but has no records of this type
    /// * `Err(DomainError::NxDomain)` - the name does not exist
    /// * `Err(DomainError::QueryTimeout | Transport | UpstreamUnavailable)` - transient
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DomainError>;
}
