//! Typed routes.
//!
//! A [`TypedRoute`] binds a path to a handler whose request and response
//! message types are fixed at compile time. The route erases those types
//! behind the [`Route`] trait so routes of different types can share one
//! table.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use prost::{Message, Name};
use prost_reflect::MessageDescriptor;

use crate::dispatch::{DispatchError, Handler};
use crate::schema::{SchemaError, SchemaRegistry};

/// A path bound to a decode → handle → encode step.
pub trait Route: Send + Sync {
    /// Request target this route answers to.
    fn path(&self) -> &str;

    /// Schema descriptor of the inbound message.
    fn request_type(&self) -> &MessageDescriptor;

    /// Schema descriptor of the outbound message.
    fn response_type(&self) -> &MessageDescriptor;

    /// Decode `body`, run the handler and encode its response.
    ///
    /// Nothing runs until the returned future is polled.
    fn call(&self, body: Bytes) -> BoxFuture<'static, Result<Bytes, DispatchError>>;
}

impl fmt::Debug for dyn Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path())
            .field("request_type", &self.request_type().full_name())
            .field("response_type", &self.response_type().full_name())
            .finish()
    }
}

/// Route generic over its request type and handler.
pub struct TypedRoute<Req, H> {
    path: String,
    request_type: MessageDescriptor,
    response_type: MessageDescriptor,
    handler: Arc<H>,
    _request: PhantomData<fn(Req)>,
}

impl<Req, H> TypedRoute<Req, H>
where
    Req: Message + Name + Default + 'static,
    H: Handler<Req>,
    H::Response: Message + Name + 'static,
{
    /// Create a route, resolving both message types in `schema`.
    ///
    /// Fails if the loaded schema does not define the request or response
    /// type the handler was compiled against.
    pub fn new(
        path: impl Into<String>,
        schema: &SchemaRegistry,
        handler: H,
    ) -> Result<Self, SchemaError> {
        let request_type = schema.lookup(&Req::full_name())?;
        let response_type = schema.lookup(&<H::Response as Name>::full_name())?;

        Ok(Self {
            path: path.into(),
            request_type,
            response_type,
            handler: Arc::new(handler),
            _request: PhantomData,
        })
    }

    /// Box the route for insertion into a [`RouteTable`](super::RouteTable).
    pub fn boxed(self) -> Box<dyn Route> {
        Box::new(self)
    }
}

impl<Req, H> Route for TypedRoute<Req, H>
where
    Req: Message + Name + Default + 'static,
    H: Handler<Req>,
    H::Response: Message + Name + 'static,
{
    fn path(&self) -> &str {
        &self.path
    }

    fn request_type(&self) -> &MessageDescriptor {
        &self.request_type
    }

    fn response_type(&self) -> &MessageDescriptor {
        &self.response_type
    }

    fn call(&self, body: Bytes) -> BoxFuture<'static, Result<Bytes, DispatchError>> {
        let handler = Arc::clone(&self.handler);

        async move {
            let request = Req::decode(body)?;
            tracing::debug!(request = ?request, "Decoded request");

            let response = handler.call(request).await?;
            tracing::debug!(response = ?response, "Encoding response");

            let mut buf = BytesMut::with_capacity(response.encoded_len());
            response.encode(&mut buf)?;
            Ok::<_, DispatchError>(buf.freeze())
        }
        .boxed()
    }
}
