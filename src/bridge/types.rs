//! Bridge error definitions.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while constructing a bridge or endpoint.
///
/// These surface immediately and are never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Hostname was empty.
    #[error("hostname must not be empty")]
    EmptyHostname,

    /// Hostname does not form a well-formed service URL.
    #[error("hostname '{0}' does not form a valid service URL")]
    InvalidHostname(String),

    /// Port 0 can never identify a reachable service.
    #[error("port must be non-zero")]
    InvalidPort,
}

/// Errors raised during network transmission, including timeouts.
///
/// Always counted in the exception metric before propagating; never
/// swallowed or translated into recovery by the bridge.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The call did not complete within the per-call timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection could not be established (refused, DNS failure).
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other transport-layer failure (broken stream, malformed
    /// response framing).
    #[error("transport error: {0}")]
    Request(String),
}

impl TransportError {
    /// Classify a client error into the bridge taxonomy.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }

    /// True when the failure was the per-call timeout expiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Result type for bridge construction.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for bridge requests.
pub type TransportResult<T> = Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyHostname.to_string(),
            "hostname must not be empty"
        );

        let err = ValidationError::InvalidHostname("bad host".to_string());
        assert!(err.to_string().contains("bad host"));
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Timeout(Duration::from_millis(100));
        assert!(err.to_string().contains("100ms"));
        assert!(err.is_timeout());

        let err = TransportError::Connection("refused".to_string());
        assert!(err.to_string().contains("refused"));
        assert!(!err.is_timeout());
    }
}
