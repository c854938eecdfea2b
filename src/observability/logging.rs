//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Own the readiness line external harnesses wait for
//!
//! # Design Decisions
//! - The readiness line has its own target, always enabled at `info`,
//!   so no `RUST_LOG` or configured filter can suppress it

use std::net::SocketAddr;

use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logged once the listener is bound, followed by the port number.
/// Test harnesses watch stdout for this text.
pub const READY_MESSAGE: &str = "Listening to port:";

/// Target of the readiness event.
pub const READY_TARGET: &str = "readiness";

/// Install the global subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset or invalid. Calling
/// this twice is harmless: the second subscriber is ignored.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(with_readiness(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Add the `readiness=info` directive to `filter`.
fn with_readiness(filter: EnvFilter) -> EnvFilter {
    match format!("{READY_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Emit the readiness line for a bound listener.
pub fn announce_ready(addr: SocketAddr) {
    tracing::info!(target: READY_TARGET, address = %addr, "{} {}", READY_MESSAGE, addr.port());
}
