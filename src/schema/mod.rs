//! Schema loading subsystem.
//!
//! # Data Flow
//! ```text
//! proto file path
//!     → registry.rs (compile with protox, build descriptor pool)
//!     → SchemaRegistry (immutable, shared via Arc)
//!     → route construction resolves request/response descriptors
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup, before any route is built
//! - Any load or lookup failure is fatal at startup
//! - Well-known `google/protobuf/*` imports need no include path

pub mod registry;

pub use registry::{SchemaError, SchemaRegistry};
