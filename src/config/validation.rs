//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject an empty mirror table
//! - Validate listener and metrics addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function over the config
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::MirrorlistConfig;

/// A single semantic validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The mirror table deserialized to nothing.
    #[error("failed to populate mirrors")]
    EmptyMirrorTable,

    /// The listener bind address is not a valid socket address.
    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),

    /// The metrics exporter address is not a valid socket address.
    #[error("invalid metrics address {0:?}")]
    InvalidMetricsAddress(String),

    /// The request timeout must be non-zero.
    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Check every semantic constraint, collecting all failures.
pub fn validate_config(config: &MirrorlistConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.mirrors.is_empty() {
        errors.push(ValidationError::EmptyMirrorTable);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
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

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
