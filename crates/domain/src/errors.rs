use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Domain does not exist: {0}")]
    NxDomain(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream rejected the request: {0}")]
    UpstreamRejected(String),

    #[error("Upstream rate limit exceeded")]
    RateLimited { retry_after: Option<Duration> },

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Classification that drives the caching and backoff policy.
    pub fn class(&self) -> ErrorClass {
        match self {
            DomainError::InvalidDomainName(_)
            | DomainError::InvalidIpAddress(_)
            | DomainError::InvalidQuery(_)
            | DomainError::NxDomain(_)
            | DomainError::UpstreamRejected(_) => ErrorClass::Permanent,
            DomainError::RateLimited { .. } => ErrorClass::RateLimited,
            DomainError::QueryTimeout
            | DomainError::Transport(_)
            | DomainError::UpstreamUnavailable(_)
            | DomainError::Cache(_)
            // garbled upstream body: proxy error page, truncated transfer
            | DomainError::Serialization(_) => ErrorClass::Transient,
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            DomainError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    Transient,
    Permanent,
    RateLimited,
}

impl ErrorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Transient => "transient",
            ErrorClass::Permanent => "permanent",
            ErrorClass::RateLimited => "rate_limited",
        }
    }

    /// Rate-limited failures are cached exactly like transient ones: never.
    pub fn is_cacheable(&self) -> bool {
        matches!(self, ErrorClass::Permanent)
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified failure, returned by resolver adapters instead of raising.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub class: ErrorClass,
    pub message: String,
}

impl Failure {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Transient, message)
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Permanent, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::RateLimited, message)
    }
}

impl From<DomainError> for Failure {
    fn from(err: DomainError) -> Self {
        Self::new(err.class(), err.to_string())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.class)
    }
}

pub type Outcome<T> = Result<T, Failure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nxdomain_is_permanent() {
        let err = DomainError::NxDomain("invalid-domain-12345.com".to_string());
        assert_eq!(err.class(), ErrorClass::Permanent);
        assert!(err.class().is_cacheable());
    }

    #[test]
    fn test_timeouts_and_transport_are_transient() {
        assert_eq!(DomainError::QueryTimeout.class(), ErrorClass::Transient);
        assert_eq!(
            DomainError::Transport("connection refused".into()).class(),
            ErrorClass::Transient
        );
        assert_eq!(
            DomainError::Cache("redis down".into()).class(),
            ErrorClass::Transient
        );
        assert!(!ErrorClass::Transient.is_cacheable());
    }

    #[test]
    fn test_undecodable_upstream_body_is_transient() {
        let err = DomainError::Serialization("Invalid ip-api response: <html>".into());
        assert_eq!(err.class(), ErrorClass::Transient);
        assert!(!err.class().is_cacheable());
    }

    #[test]
    fn test_rate_limited_is_not_cacheable() {
        let err = DomainError::RateLimited {
            retry_after: Some(Duration::from_secs(12)),
        };
        assert_eq!(err.class(), ErrorClass::RateLimited);
        assert!(!err.class().is_cacheable());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(12)));
    }

    #[test]
    fn test_failure_from_domain_error_keeps_message() {
        let failure = Failure::from(DomainError::InvalidIpAddress("not-an-ip".into()));
        assert_eq!(failure.class, ErrorClass::Permanent);
        assert_eq!(failure.message, "Invalid IP address: not-an-ip");
    }
}
