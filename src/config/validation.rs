//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, port non-zero)
//! - Check the metrics address parses when the exporter is enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::bridge::ServiceEndpoint;
use crate::config::schema::BridgeConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic violation in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("service endpoint {hostname}:{port} is invalid: {reason}")]
    InvalidEndpoint {
        hostname: String,
        port: u16,
        reason: String,
    },

    #[error("service timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration, collecting every violation.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = ServiceEndpoint::new(&config.service.hostname, config.service.port) {
        errors.push(ValidationError::InvalidEndpoint {
            hostname: config.service.hostname.clone(),
            port: config.service.port,
            reason: e.to_string(),
        });
    }

    if config.service.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
