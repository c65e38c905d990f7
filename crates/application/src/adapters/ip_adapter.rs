use inforecon_domain::{DomainError, Failure, IpInfo, Outcome, PrivateRangeFilter};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::ports::{GeoLocator, ReverseResolver};
use crate::services::RateLimitGate;

pub struct IpAdapter {
    reverse: Arc<dyn ReverseResolver>,
    geo: Arc<dyn GeoLocator>,
    gate: Arc<RateLimitGate>,
    timeout: Duration,
}

impl IpAdapter {
    pub fn new(
        reverse: Arc<dyn ReverseResolver>,
        geo: Arc<dyn GeoLocator>,
        gate: Arc<RateLimitGate>,
        timeout: Duration,
    ) -> Self {
        Self {
            reverse,
            geo,
            gate,
            timeout,
        }
    }

    /// Private addresses return immediately without any external call.
    /// Public ones get a best-effort PTR lookup followed by one geolocation call.
    pub async fn resolve(&self, ip: &str) -> Outcome<IpInfo> {
        let addr: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| Failure::from(DomainError::InvalidIpAddress(ip.to_string())))?;

        if PrivateRangeFilter::is_private(&addr) {
            debug!(ip = %addr, "Private address, skipping external lookups");
            return Ok(IpInfo::for_address(addr, true));
        }

        if let Err(wait) = self.gate.try_acquire() {
            debug!(
                ip = %addr,
                gate = self.gate.name(),
                wait_ms = wait.as_millis() as u64,
                "Geolocation call refused by rate-limit gate"
            );
            return Err(Failure::from(DomainError::RateLimited {
                retry_after: Some(wait),
            }));
        }

        let mut info = IpInfo::for_address(addr, false);
        info.reverse_dns = self.reverse_dns(addr).await;

        let located = tokio::time::timeout(self.timeout, self.geo.locate(addr))
            .await
            .map_err(|_| DomainError::QueryTimeout)
            .and_then(|result| result);

        match located {
            Ok(record) => {
                info.geo_location = Some(record.geo);
                info.asn_info = Some(record.asn);
                Ok(info)
            }
            Err(e) => {
                if let DomainError::RateLimited { retry_after } = &e {
                    self.gate.trip(*retry_after);
                }
                warn!(ip = %addr, error = %e, "Geolocation lookup failed");
                Err(Failure::from(e))
            }
        }
    }

    async fn reverse_dns(&self, addr: IpAddr) -> Option<String> {
        match tokio::time::timeout(self.timeout, self.reverse.reverse_lookup(addr)).await {
            Ok(Ok(hostname)) => hostname,
            Ok(Err(e)) => {
                debug!(ip = %addr, error = %e, "Reverse lookup failed");
                None
            }
            Err(_) => {
                debug!(ip = %addr, "Reverse lookup timed out");
                None
            }
        }
    }
}
