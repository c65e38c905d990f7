pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use inforecon_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Bytes,
    pub server: SocketAddr,
}

/// Sends raw DNS messages to one nameserver.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn server(&self) -> SocketAddr;

    fn protocol_name(&self) -> &'static str;
}
