//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! bridge calls produce:
//!     → metrics.rs (attempt/exception counters, latency histogram)
//!     → tracing events (dispatch/failure, configured by logging.rs)
//!
//! Consumers:
//!     → exporter.rs (Prometheus text exposition over HTTP)
//!     → Log aggregation (stdout via tracing-subscriber)
//! ```
//!
//! # Design Decisions
//! - Instruments are registered into a caller-supplied registry, never a
//!   process-wide singleton, so tests can assert on isolated instances
//! - Metric updates are atomic increments, cheap enough for every call
//! - A request ID flows through all log events of one dispatch

pub mod exporter;
pub mod logging;
pub mod metrics;

pub use metrics::BridgeMetrics;
