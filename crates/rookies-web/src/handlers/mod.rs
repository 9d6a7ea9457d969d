//! Request handlers for the `/NashTech` routes.

pub mod create;
pub mod delete;
pub mod details;
pub mod edit;
pub mod export;
pub mod list;

use axum::response::Redirect;
use uuid::Uuid;

use crate::BASE_PATH;

/// Parse an id taken from a route segment.
pub(crate) fn route_id(raw: &str) -> Option<Uuid> { Uuid::parse_str(raw.trim()).ok() }

/// Parse an id from a form or unconstrained route; unparsable ids become
/// the nil id, which the service rejects as an invalid argument.
pub(crate) fn lenient_id(raw: &str) -> Uuid { route_id(raw).unwrap_or_else(Uuid::nil) }

/// Post-redirect-get back to the member list.
pub(crate) fn to_list() -> Redirect { Redirect::to(BASE_PATH) }
