//! Golconda Bridge Library
//!
//! A thin, observable HTTP client connecting plugin code to a co-located
//! Golconda computation service. The bridge issues single-attempt JSON
//! POST requests with a bounded timeout and records a latency sample plus
//! attempt/failure counters around every call.

pub mod bridge;
pub mod config;
pub mod observability;

pub use bridge::{ServiceBridge, ServiceEndpoint, TransportError, ValidationError};
pub use config::BridgeConfig;
pub use observability::BridgeMetrics;
