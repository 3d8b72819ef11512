//! Request/response types for the map API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error payload returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: String,
}

/// Query parameters for route and distance lookups.
///
/// Both fields are declared optional so the handler can reject missing or
/// empty values with the API's own message instead of a generic rejection.
#[derive(Debug, Deserialize, IntoParams)]
pub struct RouteQuery {
    /// Start node name.
    pub from: Option<String>,
    /// Destination node name.
    pub to: Option<String>,
}
