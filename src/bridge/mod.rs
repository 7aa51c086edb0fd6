//! Request bridge subsystem.
//!
//! # Data Flow
//! ```text
//! Caller (editor command, CLI)
//!     → endpoint.rs (validated hostname:port, base URL)
//!     → client.rs (JSON POST with bounded timeout)
//!     → Golconda service
//!
//! Around every call:
//!     → observability::metrics (attempt counter, latency sample,
//!       exception counter on failure)
//! ```
//!
//! # Design Decisions
//! - Exactly one attempt per call; retry and fallback belong to callers
//! - The response is relayed unaltered, including error statuses
//! - Timeout is the only cancellation mechanism

pub mod client;
pub mod endpoint;
pub mod types;

pub use client::ServiceBridge;
pub use endpoint::ServiceEndpoint;
pub use types::{TransportError, TransportResult, ValidationError, ValidationResult};
