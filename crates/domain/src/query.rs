use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Cache namespace, one per query domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryNamespace {
    Dns,
    Ip,
    Search,
}

impl QueryNamespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryNamespace::Dns => "dns",
            QueryNamespace::Ip => "ip",
            QueryNamespace::Search => "search",
        }
    }

    /// Canonical form of a query subject in this namespace.
    pub fn normalize(&self, subject: &str) -> String {
        match self {
            QueryNamespace::Dns => normalize_domain(subject),
            QueryNamespace::Ip => normalize_ip(subject),
            QueryNamespace::Search => normalize_subject(subject),
        }
    }
}

impl fmt::Display for QueryNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize_subject(subject: &str) -> String {
    subject.trim().to_lowercase()
}

/// Normalize a user-supplied domain: trim, lower-case, strip an http(s)
/// scheme, anything from the first `/`, and the trailing root dot.
pub fn normalize_domain(domain: &str) -> String {
    let lowered = normalize_subject(domain);

    let without_scheme = lowered
        .strip_prefix("http://")
        .or_else(|| lowered.strip_prefix("https://"))
        .unwrap_or(&lowered);

    let host = without_scheme.split('/').next().unwrap_or_default();

    host.trim_end_matches('.').to_string()
}

/// IP literals are keyed by their canonical textual form so that
/// "2001:DB8:0::1" and "2001:db8::1" share an entry. Unparseable input
/// falls back to the plain subject normalization.
pub fn normalize_ip(ip: &str) -> String {
    let subject = normalize_subject(ip);
    subject
        .parse::<IpAddr>()
        .map(|addr| addr.to_string())
        .unwrap_or(subject)
}
