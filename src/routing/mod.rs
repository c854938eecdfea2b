//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request target (path + optional query)
//!     → table.rs (exact lookup, first match wins)
//!     → Return: matched Route or None
//!
//! Route construction (at startup):
//!     SchemaRegistry + static route list
//!     → route.rs (resolve request/response descriptors)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - Exact string match only: no prefixes, wildcards or parameters
//! - HTTP method is ignored
//! - First match wins; shadowed duplicates are logged at construction

pub mod route;
pub mod table;

pub use route::{Route, TypedRoute};
pub use table::RouteTable;
