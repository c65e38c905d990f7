use async_trait::async_trait;
use inforecon_application::ports::{DnsAnswer, DnsRecordSource};
use inforecon_domain::config::DnsConfig;
use inforecon_domain::{DomainError, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::{MessageBuilder, ResponseParser};
use crate::dns::transport::{DnsTransport, UdpTransport};

/// [`DnsRecordSource`] that forwards each query to the configured
/// nameservers in order, moving to the next one on transport failure or a
/// server-side error (SERVFAIL, REFUSED, NOTIMP).
pub struct ForwardingRecordSource {
    transports: Vec<Arc<dyn DnsTransport>>,
    timeout: Duration,
}

impl ForwardingRecordSource {
    pub fn new(transports: Vec<Arc<dyn DnsTransport>>, timeout: Duration) -> Self {
        Self {
            transports,
            timeout,
        }
    }

    pub fn from_config(config: &DnsConfig) -> Result<Self, DomainError> {
        let transports = config
            .nameservers
            .iter()
            .map(|server| {
                server
                    .parse::<SocketAddr>()
                    .map(|addr| Arc::new(UdpTransport::new(addr)) as Arc<dyn DnsTransport>)
                    .map_err(|e| {
                        DomainError::Transport(format!("Invalid nameserver '{}': {}", server, e))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(transports, config.timeout()))
    }

    async fn query_server(
        &self,
        transport: &dyn DnsTransport,
        message_id: u16,
        message: &[u8],
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        let response = transport.send(message, self.timeout).await?;
        let parsed = ResponseParser::parse_bytes(response.bytes)?;

        if parsed.id != message_id {
            return Err(DomainError::Transport(format!(
                "Response ID mismatch from {}",
                transport.server()
            )));
        }

        if parsed.is_nxdomain() {
            return Err(DomainError::NxDomain(domain.to_string()));
        }

        if parsed.is_server_error() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "{} answered {}",
                transport.server(),
                ResponseParser::rcode_to_status(parsed.rcode)
            )));
        }

        if parsed.truncated {
            debug!(domain = %domain, "Truncated UDP response, using partial answers");
        }

        Ok(parsed
            .answers
            .into_iter()
            .filter(|answer| answer.record_type() == record_type)
            .collect())
    }
}

#[async_trait]
impl DnsRecordSource for ForwardingRecordSource {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        let (message_id, message) = MessageBuilder::build_query_with_id(domain, &record_type)?;
        let mut last_error: Option<DomainError> = None;

        for transport in &self.transports {
            match self
                .query_server(transport.as_ref(), message_id, &message, domain, record_type)
                .await
            {
                Ok(answers) => {
                    debug!(
                        domain = %domain,
                        record_type = %record_type,
                        server = %transport.server(),
                        answers = answers.len(),
                        "DNS query answered"
                    );
                    return Ok(answers);
                }
                Err(DomainError::NxDomain(name)) => return Err(DomainError::NxDomain(name)),
                Err(e) => {
                    warn!(
                        domain = %domain,
                        record_type = %record_type,
                        server = %transport.server(),
                        protocol = transport.protocol_name(),
                        error = %e,
                        "Nameserver failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DomainError::UpstreamUnavailable("no nameservers configured".to_string())
        }))
    }
}
