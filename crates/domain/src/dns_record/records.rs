use serde::{Deserialize, Serialize};

/// A record - IPv4 address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ARecord {
    pub host: String,
    pub ip: String,
    pub ttl: u32,
}

/// AAAA record - IPv6 address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AAAARecord {
    pub host: String,
    pub ip: String,
    pub ttl: u32,
}

/// CNAME record - alias target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CNAMERecord {
    pub host: String,
    pub target: String,
    pub ttl: u32,
}

/// MX record - mail exchanger. Lower priority is preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MXRecord {
    pub exchange: String,
    pub priority: u16,
    pub ttl: u32,
}

/// NS record - authoritative nameserver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NSRecord {
    pub host: String,
    pub nameserver: String,
    pub ttl: u32,
}

/// TXT record. Multi-string records are joined without separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TXTRecord {
    pub host: String,
    pub text: String,
    pub ttl: u32,
}
