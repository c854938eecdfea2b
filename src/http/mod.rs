//! HTTP transport.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum/hyper: HTTP/1.1 parsing, one task per connection)
//!     → fallback handler (every method, every path)
//!     → dispatch::Pipeline::handle
//!     → status + optional protobuf body back to the client
//! ```

pub mod server;

pub use server::HttpServer;
