//! Handler abstraction.

use std::future::Future;

use super::HandlerError;

/// Asynchronous business handler for request type `Req`.
///
/// Implemented for every `Fn(Req) -> impl Future<Output = Result<Resp,
/// HandlerError>>`, so plain `async fn`s can be bound to routes.
pub trait Handler<Req>: Send + Sync + 'static {
    /// Message returned on success.
    type Response;

    type Future: Future<Output = Result<Self::Response, HandlerError>> + Send + 'static;

    fn call(&self, request: Req) -> Self::Future;
}

impl<Req, Resp, F, Fut> Handler<Req> for F
where
    F: Fn(Req) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Resp, HandlerError>> + Send + 'static,
{
    type Response = Resp;
    type Future = Fut;

    fn call(&self, request: Req) -> Self::Future {
        self(request)
    }
}
