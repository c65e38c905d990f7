use async_trait::async_trait;
use chrono::{DateTime, Utc};
use inforecon_application::ports::WhoisLookup;
use inforecon_domain::config::WhoisConfig;
use inforecon_domain::{DomainError, WhoisInfo};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::http::{build_client, classify_status, request_error, retry_after};

const SERVICE: &str = "rdap";

#[derive(Debug, Deserialize)]
struct RdapDomain {
    #[serde(default)]
    status: Vec<String>,
    #[serde(default)]
    events: Vec<RdapEvent>,
    #[serde(default)]
    entities: Vec<RdapEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RdapEvent {
    event_action: String,
    #[serde(default)]
    event_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RdapEntity {
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default)]
    vcard_array: Option<Value>,
}

/// Registration data over RDAP (RFC 9083), the JSON successor of port-43
/// WHOIS. The bootstrap service redirects to the registry of the TLD.
pub struct RdapWhoisClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RdapWhoisClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(concat!("inforecon/", env!("CARGO_PKG_VERSION")))?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &WhoisConfig) -> Result<Self, DomainError> {
        Self::new(config.base_url.clone(), config.timeout())
    }
}

#[async_trait]
impl WhoisLookup for RdapWhoisClient {
    async fn lookup(&self, domain: &str) -> Result<Option<WhoisInfo>, DomainError> {
        let response = self
            .client
            .get(format!("{}/domain/{}", self.base_url, domain))
            .header(reqwest::header::ACCEPT, "application/rdap+json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| request_error(SERVICE, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(domain = %domain, "No RDAP record");
            return Ok(None);
        }

        let hint = retry_after(response.headers());
        classify_status(SERVICE, response.status(), hint)?;

        let body = response
            .text()
            .await
            .map_err(|e| request_error(SERVICE, e))?;

        parse_response(&body).map(Some)
    }
}

fn parse_response(body: &str) -> Result<WhoisInfo, DomainError> {
    let parsed: RdapDomain = serde_json::from_str(body)
        .map_err(|e| DomainError::Serialization(format!("Invalid RDAP response: {}", e)))?;

    let mut info = WhoisInfo {
        registrar: parsed.entities.iter().find_map(registrar_name),
        status: parsed.status,
        ..WhoisInfo::default()
    };

    for event in parsed.events {
        let date = event.event_date.as_deref().and_then(parse_date);
        match event.event_action.as_str() {
            "registration" => info.creation_date = date,
            "last changed" => info.updated_date = date,
            "expiration" => info.expiration_date = date,
            _ => {}
        }
    }

    Ok(info)
}

/// Formatted name (`fn`) from the jCard of the entity holding the registrar role.
fn registrar_name(entity: &RdapEntity) -> Option<String> {
    if !entity.roles.iter().any(|r| r == "registrar") {
        return None;
    }
    entity
        .vcard_array
        .as_ref()?
        .get(1)?
        .as_array()?
        .iter()
        .find(|prop| prop.get(0).and_then(Value::as_str) == Some("fn"))
        .and_then(|prop| prop.get(3))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}
