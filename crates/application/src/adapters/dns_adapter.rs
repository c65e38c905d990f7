use futures::future::join_all;
use inforecon_domain::{
    AAAARecord, ARecord, CNAMERecord, DnsInfo, DomainError, ErrorClass, Failure, MXRecord,
    NSRecord, Outcome, RecordType, TXTRecord, WhoisInfo,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::ports::{DnsAnswer, DnsRecordSource, WhoisLookup};

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Aggregated lookup. `complete` is false when some record types could not
/// be fetched because of transient failures; such a result must not be cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsLookup {
    pub info: DnsInfo,
    pub complete: bool,
}

/// Fetches every record type of a domain independently and folds them into
/// one `DnsInfo`. Never raises: failures come back as a classified `Failure`.
///
/// Registration data is fetched alongside the records when a [`WhoisLookup`]
/// is attached. Its failure only leaves `whois_info` empty.
pub struct DnsAdapter {
    source: Arc<dyn DnsRecordSource>,
    whois: Option<(Arc<dyn WhoisLookup>, Duration)>,
    timeout: Duration,
}

impl DnsAdapter {
    pub fn new(source: Arc<dyn DnsRecordSource>, timeout: Duration) -> Self {
        Self {
            source,
            whois: None,
            timeout,
        }
    }

    pub fn with_whois(mut self, whois: Arc<dyn WhoisLookup>, timeout: Duration) -> Self {
        self.whois = Some((whois, timeout));
        self
    }

    /// `domain` must already be normalized.
    pub async fn resolve(&self, domain: &str) -> Outcome<DnsLookup> {
        validate_domain(domain).map_err(Failure::from)?;

        let sub_queries = RecordType::FULL_LOOKUP
            .iter()
            .map(|record_type| self.sub_query(domain, *record_type));
        let (results, whois_info) = tokio::join!(join_all(sub_queries), self.whois_info(domain));

        let mut info = DnsInfo::new(domain);
        info.whois_info = whois_info;
        let mut transient: Vec<(RecordType, DomainError)> = Vec::new();

        for (record_type, result) in RecordType::FULL_LOOKUP.iter().zip(results) {
            match result {
                Ok(answers) => {
                    for answer in answers {
                        push_answer(&mut info, answer);
                    }
                }
                Err(DomainError::NxDomain(_)) => {
                    debug!(domain = %domain, "NXDOMAIN");
                    return Err(Failure::permanent(format!(
                        "domain does not exist: {}",
                        domain
                    )));
                }
                Err(e) if e.class() == ErrorClass::Permanent => {
                    return Err(Failure::from(e));
                }
                Err(e) => {
                    debug!(
                        domain = %domain,
                        record_type = %record_type,
                        error = %e,
                        "Sub-query failed"
                    );
                    transient.push((*record_type, e));
                }
            }
        }

        if transient.len() == RecordType::FULL_LOOKUP.len() {
            let (_, first) = &transient[0];
            warn!(domain = %domain, error = %first, "All DNS sub-queries failed");
            return Err(Failure::new(
                first.class(),
                format!("DNS lookup failed for {}: {}", domain, first),
            ));
        }

        if !transient.is_empty() {
            warn!(
                domain = %domain,
                failed = transient.len(),
                "DNS lookup incomplete"
            );
        }

        Ok(DnsLookup {
            info,
            complete: transient.is_empty(),
        })
    }

    async fn whois_info(&self, domain: &str) -> Option<WhoisInfo> {
        let (whois, timeout) = self.whois.as_ref()?;
        match tokio::time::timeout(*timeout, whois.lookup(domain)).await {
            Ok(Ok(info)) => info,
            Ok(Err(e)) => {
                debug!(domain = %domain, error = %e, "WHOIS lookup failed");
                None
            }
            Err(_) => {
                debug!(domain = %domain, "WHOIS lookup timed out");
                None
            }
        }
    }

    async fn sub_query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        tokio::time::timeout(self.timeout, self.source.query(domain, record_type))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
    }
}

fn validate_domain(domain: &str) -> Result<(), DomainError> {
    if domain.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain must not be empty".to_string(),
        ));
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds {} characters",
            domain, MAX_DOMAIN_LEN
        )));
    }

    let valid_label = |label: &str| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    };
    if !domain.split('.').all(valid_label) {
        return Err(DomainError::InvalidDomainName(domain.to_string()));
    }

    Ok(())
}

fn push_answer(info: &mut DnsInfo, answer: DnsAnswer) {
    match answer {
        DnsAnswer::A { host, addr, ttl } => info.a_records.push(ARecord {
            host,
            ip: addr.to_string(),
            ttl,
        }),
        DnsAnswer::AAAA { host, addr, ttl } => info.aaaa_records.push(AAAARecord {
            host,
            ip: addr.to_string(),
            ttl,
        }),
        DnsAnswer::CNAME { host, target, ttl } => {
            info.cname_records.push(CNAMERecord { host, target, ttl })
        }
        DnsAnswer::MX {
            exchange,
            preference,
            ttl,
        } => info.mx_records.push(MXRecord {
            exchange,
            priority: preference,
            ttl,
        }),
        DnsAnswer::NS {
            host,
            nameserver,
            ttl,
        } => info.ns_records.push(NSRecord {
            host,
            nameserver,
            ttl,
        }),
        DnsAnswer::TXT { host, text, ttl } => info.txt_records.push(TXTRecord { host, text, ttl }),
        DnsAnswer::PTR { .. } => {}
    }
}
