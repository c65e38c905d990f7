use async_trait::async_trait;
use inforecon_application::ports::{DnsAnswer, DnsRecordSource, ReverseResolver};
use inforecon_domain::{DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// PTR lookups through the same record source used for forward queries.
pub struct PtrReverseResolver {
    source: Arc<dyn DnsRecordSource>,
}

impl PtrReverseResolver {
    pub fn new(source: Arc<dyn DnsRecordSource>) -> Self {
        Self { source }
    }

    pub fn ip_to_reverse_domain(ip: &IpAddr) -> String {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                format!(
                    "{}.{}.{}.{}.in-addr.arpa",
                    octets[3], octets[2], octets[1], octets[0]
                )
            }
            IpAddr::V6(ipv6) => {
                let mut nibbles = Vec::with_capacity(32);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.ip6.arpa", nibbles.join("."))
            }
        }
    }
}

#[async_trait]
impl ReverseResolver for PtrReverseResolver {
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        let reverse_domain = Self::ip_to_reverse_domain(&ip);

        debug!(ip = %ip, reverse_domain = %reverse_domain, "Performing PTR lookup");

        match self.source.query(&reverse_domain, RecordType::PTR).await {
            Ok(answers) => {
                let hostname = answers.into_iter().find_map(|answer| match answer {
                    DnsAnswer::PTR { target, .. } => Some(target),
                    _ => None,
                });
                debug!(ip = %ip, hostname = ?hostname, "PTR lookup finished");
                Ok(hostname)
            }
            Err(DomainError::NxDomain(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
