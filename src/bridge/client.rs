//! Bridge client with timeout and instrumentation.
//!
//! # Responsibilities
//! - Issue single-attempt JSON POST requests to the Golconda service
//! - Enforce a per-call timeout
//! - Record attempt count, latency, and failures around every call
//! - Relay the response to the caller without interpretation

use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::time::timeout;
use uuid::Uuid;

use crate::bridge::endpoint::ServiceEndpoint;
use crate::bridge::types::{TransportError, TransportResult, ValidationResult};
use crate::config::BridgeConfig;
use crate::observability::metrics::BridgeMetrics;

/// Timeout applied when the caller does not supply one. The service is
/// co-located, so round trips are expected to stay well under this.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);

/// HTTP client bound to a single Golconda service endpoint.
///
/// Cloning is cheap: the underlying connection pool and metric
/// instruments are shared, so clones can be driven from many tasks
/// concurrently.
#[derive(Clone)]
pub struct ServiceBridge {
    /// Target service endpoint.
    endpoint: ServiceEndpoint,
    /// Shared HTTP client; connects lazily, so construction does no I/O.
    client: reqwest::Client,
    /// Instruments recorded around every call.
    metrics: BridgeMetrics,
    /// Timeout used by [`ServiceBridge::request`].
    default_timeout: Duration,
}

impl ServiceBridge {
    /// Create a bridge bound to `hostname:port`.
    ///
    /// Fails only on malformed inputs; no network I/O is performed.
    pub fn new(hostname: &str, port: u16, metrics: BridgeMetrics) -> ValidationResult<Self> {
        let endpoint = ServiceEndpoint::new(hostname, port)?;
        Ok(Self {
            endpoint,
            client: reqwest::Client::new(),
            metrics,
            default_timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a bridge from configuration, taking the endpoint and the
    /// default timeout from the `[service]` section.
    pub fn from_config(config: &BridgeConfig, metrics: BridgeMetrics) -> ValidationResult<Self> {
        let mut bridge = Self::new(&config.service.hostname, config.service.port, metrics)?;
        bridge.default_timeout = Duration::from_millis(config.service.timeout_ms);
        Ok(bridge)
    }

    /// The fully qualified base URL, `http://{hostname}:{port}`.
    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    /// The endpoint this bridge is bound to.
    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// POST `payload` to `{base_url}/{path}` with the default timeout.
    pub async fn request<T>(&self, path: &str, payload: &T) -> TransportResult<reqwest::Response>
    where
        T: Serialize + ?Sized,
    {
        self.request_with_timeout(path, payload, self.default_timeout)
            .await
    }

    /// POST `payload` to `{base_url}/{path}`, waiting at most `ttl`.
    ///
    /// Exactly one attempt is made. The response is returned unaltered,
    /// whatever its status; transport failures propagate after being
    /// counted. Every call records one attempt and one latency sample,
    /// failures included, so the distribution reflects time spent
    /// waiting on timeouts too.
    pub async fn request_with_timeout<T>(
        &self,
        path: &str,
        payload: &T,
        ttl: Duration,
    ) -> TransportResult<reqwest::Response>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.endpoint.base_url(), path);
        let request_id = Uuid::new_v4();

        // Counted before dispatch: attempts, not completions.
        self.metrics.record_attempt();

        tracing::debug!(
            request_id = %request_id,
            url = %url,
            timeout = ?ttl,
            "Dispatching request"
        );

        let start = Instant::now();
        let outcome = timeout(ttl, self.client.post(&url).json(payload).send()).await;
        self.metrics.record_duration(start.elapsed());

        match outcome {
            Ok(Ok(response)) => {
                tracing::debug!(
                    request_id = %request_id,
                    status = %response.status(),
                    "Response received"
                );
                Ok(response)
            }
            Ok(Err(e)) => {
                self.metrics.record_exception();
                tracing::warn!(request_id = %request_id, error = %e, "Transport failure");
                Err(TransportError::from_reqwest(e))
            }
            Err(_) => {
                self.metrics.record_exception();
                tracing::warn!(request_id = %request_id, timeout = ?ttl, "Request timed out");
                Err(TransportError::Timeout(ttl))
            }
        }
    }
}

impl std::fmt::Debug for ServiceBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceBridge")
            .field("endpoint", &self.endpoint)
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
