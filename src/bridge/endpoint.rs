//! Service endpoint identification.

use crate::bridge::types::{ValidationError, ValidationResult};

/// Immutable (hostname, port) pair identifying the Golconda service.
///
/// Validated at construction; the derived base URL never changes for the
/// lifetime of the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    hostname: String,
    port: u16,
    base_url: String,
}

impl ServiceEndpoint {
    /// Create an endpoint, validating that the pair forms a usable URL.
    pub fn new(hostname: &str, port: u16) -> ValidationResult<Self> {
        if hostname.is_empty() {
            return Err(ValidationError::EmptyHostname);
        }
        if port == 0 {
            return Err(ValidationError::InvalidPort);
        }

        let base_url = format!("http://{}:{}", hostname, port);
        let parsed = url::Url::parse(&base_url)
            .map_err(|_| ValidationError::InvalidHostname(hostname.to_string()))?;

        // A hostname carrying URL metacharacters ("/", "@", "?") parses,
        // but lands in the path or userinfo instead of the host.
        let host_matches = parsed
            .host_str()
            .is_some_and(|h| h.eq_ignore_ascii_case(hostname));
        if !host_matches || parsed.port_or_known_default() != Some(port) {
            return Err(ValidationError::InvalidHostname(hostname.to_string()));
        }

        Ok(Self {
            hostname: hostname.to_string(),
            port,
            base_url,
        })
    }

    /// The fully qualified base URL, `http://{hostname}:{port}`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl std::fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base_url)
    }
}
