//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address is `host:port` with a numeric port
//! - Reject empty paths and filters
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: &ServerConfig → Result<(), Vec<ValidationError>>
//! - Hostnames are not resolved here; the listener bind does that

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a host:port address")]
    InvalidBindAddress(String),

    #[error("schema.proto_path must not be empty")]
    EmptyProtoPath,

    #[error("observability.log_filter must not be empty")]
    EmptyLogFilter,
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_host_port(&config.listener.bind_address) {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.schema.proto_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyProtoPath);
    }

    if config.observability.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `host:port`, where host may be a name, an IPv4 address or a
/// bracketed IPv6 address.
fn is_host_port(address: &str) -> bool {
    match address.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}
