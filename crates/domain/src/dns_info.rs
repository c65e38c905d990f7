use crate::dns_record::{
    AAAARecord, ARecord, CNAMERecord, MXRecord, NSRecord, RecordType, TXTRecord,
};
use crate::whois_info::WhoisInfo;
use serde::{Deserialize, Serialize};

/// Type name selecting only the registration data in a type-scoped lookup
pub const WHOIS_SECTION: &str = "WHOIS";

/// Aggregated DNS information for one domain.
///
/// Record types the domain does not publish are empty sequences. `error` is only
/// set when the lookup as a whole failed (resolver unreachable, domain does not
/// exist), never because a single record type is absent. `whois_info` is
/// best effort and stays `None` when registration data could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DnsInfo {
    pub domain: String,
    #[serde(default)]
    pub a_records: Vec<ARecord>,
    #[serde(default)]
    pub aaaa_records: Vec<AAAARecord>,
    #[serde(default)]
    pub cname_records: Vec<CNAMERecord>,
    #[serde(default)]
    pub mx_records: Vec<MXRecord>,
    #[serde(default)]
    pub ns_records: Vec<NSRecord>,
    #[serde(default)]
    pub txt_records: Vec<TXTRecord>,
    #[serde(default)]
    pub whois_info: Option<WhoisInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DnsInfo {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Failed lookup: every record sequence stays empty.
    pub fn failed(domain: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn record_count(&self) -> usize {
        self.a_records.len()
            + self.aaaa_records.len()
            + self.cname_records.len()
            + self.mx_records.len()
            + self.ns_records.len()
            + self.txt_records.len()
    }

    /// Copy keeping only the registration data.
    pub fn whois_only(&self) -> DnsInfo {
        DnsInfo {
            domain: self.domain.clone(),
            whois_info: self.whois_info.clone(),
            error: self.error.clone(),
            ..DnsInfo::default()
        }
    }

    /// Copy keeping only the records of `record_type`. The error, if any, is kept.
    pub fn filtered(&self, record_type: RecordType) -> DnsInfo {
        let mut out = DnsInfo {
            domain: self.domain.clone(),
            error: self.error.clone(),
            ..DnsInfo::default()
        };

        match record_type {
            RecordType::A => out.a_records = self.a_records.clone(),
            RecordType::AAAA => out.aaaa_records = self.aaaa_records.clone(),
            RecordType::CNAME => out.cname_records = self.cname_records.clone(),
            RecordType::MX => out.mx_records = self.mx_records.clone(),
            RecordType::NS => out.ns_records = self.ns_records.clone(),
            RecordType::TXT => out.txt_records = self.txt_records.clone(),
            RecordType::PTR => {}
        }

        out
    }
}
