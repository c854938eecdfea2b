//! Dispatch error types.

use axum::http::StatusCode;
use thiserror::Error;

/// Failure reported by a business handler.
///
/// Expected bad input is not a `HandlerError`: handlers report it inside a
/// successful response.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(String);

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<time::error::Format> for HandlerError {
    fn from(err: time::error::Format) -> Self {
        Self(format!("date formatting failed: {err}"))
    }
}

/// Errors that can occur after a route has been matched.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request body could not be read to completion.
    #[error("failed to read request body: {0}")]
    Body(#[source] axum::Error),

    /// The body is not valid protobuf wire format for the request type.
    #[error("failed to decode request: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The handler failed.
    #[error("handler failed: {0}")]
    Handler(#[from] HandlerError),

    /// The handler's response could not be encoded.
    #[error("failed to encode response: {0}")]
    Encode(#[from] prost::EncodeError),

    /// Decode, handler or encode panicked.
    #[error("request handling panicked: {0}")]
    Panicked(String),
}

impl DispatchError {
    /// Status code sent to the client.
    ///
    /// Client-caused decode failures and server-side failures are not
    /// distinguished: every dispatch error is a 500.
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
