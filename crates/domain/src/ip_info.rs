use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnInfo {
    /// Autonomous system number as reported upstream, e.g. "AS15169"
    pub asn: Option<String>,
    pub isp: Option<String>,
    pub organization: Option<String>,
}

/// IP address information.
///
/// For private addresses `geo_location` and `asn_info` are always `None`;
/// no external lookup is attempted for them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IpInfo {
    pub ip: String,
    /// 4 or 6; 0 when the literal could not be parsed
    pub ip_version: u8,
    pub is_private: bool,
    #[serde(default)]
    pub reverse_dns: Option<String>,
    #[serde(default)]
    pub geo_location: Option<GeoLocation>,
    #[serde(default)]
    pub asn_info: Option<AsnInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

impl IpInfo {
    pub fn for_address(addr: IpAddr, is_private: bool) -> Self {
        Self {
            ip: addr.to_string(),
            ip_version: ip_version(&addr),
            is_private,
            ..Self::default()
        }
    }

    /// Failed lookup. The version is kept when the literal parsed.
    pub fn failed(ip: impl Into<String>, error: impl Into<String>) -> Self {
        let ip = ip.into();
        let ip_version = ip.parse::<IpAddr>().map(|a| ip_version(&a)).unwrap_or(0);
        Self {
            ip,
            ip_version,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

fn ip_version(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => 4,
        IpAddr::V6(_) => 6,
    }
}
