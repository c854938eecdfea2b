//! Route lookup.
//!
//! # Responsibilities
//! - Store the routes in registration order
//! - Look up the route for a request target
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan: the table holds a handful of routes
//! - Duplicate paths keep the first registration; later ones are shadowed

use super::Route;

/// Ordered, immutable set of routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Box<dyn Route>>,
}

impl RouteTable {
    /// Build a table from routes in priority order.
    pub fn new(routes: Vec<Box<dyn Route>>) -> Self {
        for (index, route) in routes.iter().enumerate() {
            if routes[..index].iter().any(|earlier| earlier.path() == route.path()) {
                tracing::warn!(
                    path = %route.path(),
                    position = index,
                    "Duplicate route path, shadowed by an earlier registration"
                );
            }
        }

        Self { routes }
    }

    /// Find the route whose path equals `target` exactly.
    ///
    /// `target` is the request path including any query string.
    pub fn find(&self, target: &str) -> Option<&dyn Route> {
        self.routes
            .iter()
            .find(|route| route.path() == target)
            .map(|route| route.as_ref())
    }

    /// Registered paths in lookup order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.path())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
