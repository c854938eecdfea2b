//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router and hand every request to the pipeline
//! - Wire up request tracing
//! - Announce readiness once the listener is bound
//! - Stop accepting on shutdown and drain in-flight requests
//!
//! # Design Decisions
//! - No axum routes: path matching belongs to the route table, which
//!   matches on path plus query string
//! - No body limit or timeout layers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{uri::PathAndQuery, Request},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::dispatch::Pipeline;
use crate::observability::announce_ready;

/// HTTP front end for a [`Pipeline`].
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(pipeline: Pipeline) -> Self {
        let router = Router::new()
            .fallback(dispatch_handler)
            .with_state(Arc::new(pipeline))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// The configured router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve connections from `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        announce_ready(addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn dispatch_handler(
    State(pipeline): State<Arc<Pipeline>>,
    request: Request<Body>,
) -> Response {
    let (parts, body) = request.into_parts();
    let target = parts
        .uri
        .path_and_query()
        .map(PathAndQuery::as_str)
        .unwrap_or_else(|| parts.uri.path());

    pipeline
        .handle(&parts.method, target, body)
        .await
        .into_response()
}
