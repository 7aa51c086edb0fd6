//! Metrics collection.
//!
//! # Metrics
//! - `bridge_request_processing_seconds` (histogram): call duration,
//!   failed calls included
//! - `bridge_requests_total` (counter): calls attempted
//! - `bridge_requests_exceptions_total` (counter): calls that failed at
//!   the transport layer

use std::time::Duration;

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};

/// Buckets tuned for a co-located service: most calls land in the low
/// milliseconds, the tail covers timeouts up to a couple of seconds.
const PROCESSING_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
];

/// Instruments recorded around every bridge call.
///
/// Created against an explicit [`Registry`] and handed to the bridge at
/// construction. Cloning shares the underlying instruments, so a clone
/// kept by the caller observes everything the bridge records. One
/// `BridgeMetrics` per registry: registering a second set into the same
/// registry fails with a duplicate-collector error.
#[derive(Clone)]
pub struct BridgeMetrics {
    processing_seconds: Histogram,
    requests_total: IntCounter,
    exceptions_total: IntCounter,
}

impl BridgeMetrics {
    /// Create the instrument set and register it into `registry`.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let processing_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "bridge_request_processing_seconds",
                "Duration of bridge calls to the Golconda service",
            )
            .buckets(PROCESSING_BUCKETS.to_vec()),
        )?;
        let requests_total = IntCounter::new(
            "bridge_requests_total",
            "Calls attempted through the bridge",
        )?;
        let exceptions_total = IntCounter::new(
            "bridge_requests_exceptions_total",
            "Bridge calls that failed at the transport layer",
        )?;

        registry.register(Box::new(processing_seconds.clone()))?;
        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(exceptions_total.clone()))?;

        Ok(Self {
            processing_seconds,
            requests_total,
            exceptions_total,
        })
    }

    /// Count one attempted call. Recorded before the call is dispatched.
    pub(crate) fn record_attempt(&self) {
        self.requests_total.inc();
    }

    /// Record the full duration of one call, successful or not.
    pub(crate) fn record_duration(&self, elapsed: Duration) {
        self.processing_seconds.observe(elapsed.as_secs_f64());
    }

    /// Count one transport failure.
    pub(crate) fn record_exception(&self) {
        self.exceptions_total.inc();
    }

    /// Current value of `bridge_requests_total`.
    pub fn requests_total(&self) -> u64 {
        self.requests_total.get()
    }

    /// Current value of `bridge_requests_exceptions_total`.
    pub fn exceptions_total(&self) -> u64 {
        self.exceptions_total.get()
    }

    /// Number of latency samples recorded.
    pub fn processing_sample_count(&self) -> u64 {
        self.processing_seconds.get_sample_count()
    }

    /// Sum of all recorded latency samples, in seconds.
    pub fn processing_sample_sum(&self) -> f64 {
        self.processing_seconds.get_sample_sum()
    }
}
