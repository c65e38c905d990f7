use async_trait::async_trait;
use inforecon_application::ports::{GeoAsnRecord, GeoLocator};
use inforecon_domain::config::GeoConfig;
use inforecon_domain::{AsnInfo, DomainError, GeoLocation};
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

use crate::http::{build_client, classify_status, header_secs, request_error, retry_after};

const SERVICE: &str = "ip-api";
const FIELDS: &str = "status,message,country,regionName,city,lat,lon,timezone,isp,org,as";
/// Seconds until the ip-api quota window resets
const TTL_HEADER: &str = "x-ttl";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    country: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    autonomous_system: Option<String>,
}

/// ip-api.com JSON endpoint client.
pub struct IpApiGeoLocator {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl IpApiGeoLocator {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(concat!("inforecon/", env!("CARGO_PKG_VERSION")))?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &GeoConfig) -> Result<Self, DomainError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    fn url_for(&self, ip: IpAddr) -> String {
        format!("{}/{}", self.base_url, ip)
    }
}

#[async_trait]
impl GeoLocator for IpApiGeoLocator {
    async fn locate(&self, ip: IpAddr) -> Result<GeoAsnRecord, DomainError> {
        let response = self
            .client
            .get(self.url_for(ip))
            .query(&[("fields", FIELDS)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| request_error(SERVICE, e))?;

        let headers = response.headers();
        let hint = header_secs(headers, TTL_HEADER).or_else(|| retry_after(headers));
        classify_status(SERVICE, response.status(), hint)?;

        let body = response
            .text()
            .await
            .map_err(|e| request_error(SERVICE, e))?;

        debug!(ip = %ip, bytes = body.len(), "ip-api response received");
        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<GeoAsnRecord, DomainError> {
    let parsed: IpApiResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Serialization(format!("Invalid ip-api response: {}", e)))?;

    if parsed.status != "success" {
        return Err(DomainError::UpstreamRejected(
            parsed
                .message
                .unwrap_or_else(|| format!("lookup status '{}'", parsed.status)),
        ));
    }

    // "as" looks like "AS15169 Google LLC"
    let asn = parsed
        .autonomous_system
        .as_deref()
        .and_then(|s| s.split_whitespace().next())
        .map(str::to_string);

    Ok(GeoAsnRecord {
        geo: GeoLocation {
            country: parsed.country,
            region: parsed.region_name,
            city: parsed.city,
            latitude: parsed.lat,
            longitude: parsed.lon,
            timezone: parsed.timezone,
        },
        asn: AsnInfo {
            asn,
            isp: parsed.isp,
            organization: parsed.org,
        },
    })
}
