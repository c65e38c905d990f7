//! Shared HTTP plumbing for the JSON collaborators.

use inforecon_domain::DomainError;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use std::time::Duration;

pub(crate) fn build_client(user_agent: &str) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {}", e)))
}

/// Seconds-valued header, e.g. `Retry-After: 30` or ip-api's `X-Ttl: 42`.
pub(crate) fn header_secs(headers: &HeaderMap, name: &str) -> Option<Duration> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    header_secs(headers, RETRY_AFTER.as_str())
}

/// 429 → rate limited, 5xx → unavailable, other non-2xx → rejected.
pub(crate) fn classify_status(
    service: &str,
    status: StatusCode,
    retry_after: Option<Duration>,
) -> Result<(), DomainError> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(DomainError::RateLimited { retry_after });
    }
    let reason = format!(
        "{} returned HTTP {}: {}",
        service,
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
    if status.is_server_error() {
        Err(DomainError::UpstreamUnavailable(reason))
    } else {
        Err(DomainError::UpstreamRejected(reason))
    }
}

pub(crate) fn request_error(service: &str, error: reqwest::Error) -> DomainError {
    if error.is_timeout() {
        DomainError::QueryTimeout
    } else {
        DomainError::UpstreamUnavailable(format!("{} request failed: {}", service, error))
    }
}
