//! Protobuf test-fixture HTTP server.
//!
//! Binds URL paths to typed protobuf decode → handle → encode steps and
//! serves them over plain HTTP/1.1. Used as the mock backend when testing
//! protobuf request/response clients.

pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proto;
pub mod routing;
pub mod schema;

pub use config::ServerConfig;
pub use dispatch::Pipeline;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use schema::SchemaRegistry;
