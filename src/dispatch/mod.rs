//! Typed dispatch pipeline.
//!
//! # Data Flow
//! ```text
//! (method, target, body stream) from the transport
//!     → pipeline.rs (route lookup: miss → 404)
//!     → pipeline.rs (buffer body until end-of-stream)
//!     → routing::Route::call (decode → handler → encode)
//!     → DispatchResponse (200 + protobuf body | 500 empty)
//! ```
//!
//! # Design Decisions
//! - Every failure after route resolution is contained and becomes a 500
//! - Panics inside decode, handler or encode are caught, not propagated
//! - Error details are logged, never written to the response body
//! - No retries: each request is handled exactly once

pub mod error;
pub mod handler;
pub mod pipeline;

pub use error::{DispatchError, HandlerError};
pub use handler::Handler;
pub use pipeline::{DispatchResponse, Pipeline};
