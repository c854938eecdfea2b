//! Request dispatch.
//!
//! # Responsibilities
//! - Resolve the route for a request target
//! - Buffer the request body until end-of-stream
//! - Run the route's decode → handler → encode step
//! - Map every outcome to a status code and optional body
//!
//! # Design Decisions
//! - No body size limit and no read timeout
//! - Unmatched targets never read the body
//! - Panics are caught with `catch_unwind` and answered with a 500

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::FutureExt;

use super::DispatchError;
use crate::proto::PROTOBUF_CONTENT_TYPE;
use crate::routing::RouteTable;

/// Outcome of dispatching one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    pub status: StatusCode,
    /// Encoded response message; present only on success.
    pub body: Option<Bytes>,
}

impl DispatchResponse {
    fn ok(body: Bytes) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body),
        }
    }

    fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    pub fn not_found() -> Self {
        Self::empty(StatusCode::NOT_FOUND)
    }
}

impl IntoResponse for DispatchResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (
                self.status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(PROTOBUF_CONTENT_TYPE))],
                body,
            )
                .into_response(),
            None => self.status.into_response(),
        }
    }
}

/// Dispatches requests to the routes of a [`RouteTable`].
#[derive(Debug)]
pub struct Pipeline {
    routes: RouteTable,
}

impl Pipeline {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    /// Handle one request.
    ///
    /// `target` is the request path plus query string, matched verbatim.
    /// The method is logged but plays no part in dispatch.
    pub async fn handle(&self, method: &Method, target: &str, body: Body) -> DispatchResponse {
        tracing::info!("{} {}", method, target);

        let Some(route) = self.routes.find(target) else {
            tracing::debug!(request_target = %target, "No route matched");
            return DispatchResponse::not_found();
        };

        let result = match axum::body::to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                tracing::debug!(
                    path = %route.path(),
                    body_len = bytes.len(),
                    body = ?bytes,
                    "Extracted body"
                );
                match AssertUnwindSafe(route.call(bytes)).catch_unwind().await {
                    Ok(result) => result,
                    Err(panic) => Err(DispatchError::Panicked(panic_message(panic))),
                }
            }
            Err(e) => Err(DispatchError::Body(e)),
        };

        match result {
            Ok(encoded) => DispatchResponse::ok(encoded),
            Err(e) => {
                tracing::error!(
                    path = %route.path(),
                    request_type = %route.request_type().full_name(),
                    error = %e,
                    "Error during request handling"
                );
                DispatchResponse::empty(e.status())
            }
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
