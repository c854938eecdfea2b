//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!
//! Consumers:
//!     → logging.rs (fmt subscriber on stdout, filtered by EnvFilter)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured filter
//! - The readiness line uses its own always-enabled target

pub mod logging;

pub use logging::{announce_ready, init_logging, READY_MESSAGE, READY_TARGET};
