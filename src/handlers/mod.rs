//! Business handlers and the static route list.

pub mod echo;
pub mod happy_day;

use crate::routing::{RouteTable, TypedRoute};
use crate::schema::{SchemaError, SchemaRegistry};

pub const HAPPY_DAY_VERIFY_PATH: &str = "/happy-day/verify";
pub const ECHO_PATH: &str = "/echo";

/// Build the server's route table.
///
/// Fails if `schema` is missing a message type a route depends on.
pub fn route_table(schema: &SchemaRegistry) -> Result<RouteTable, SchemaError> {
    let routes = vec![
        TypedRoute::new(HAPPY_DAY_VERIFY_PATH, schema, happy_day::verify)?.boxed(),
        TypedRoute::new(ECHO_PATH, schema, echo::echo)?.boxed(),
    ];

    Ok(RouteTable::new(routes))
}
