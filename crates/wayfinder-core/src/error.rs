//! Error types for wayfinder-core.

use thiserror::Error;

/// Routing error types.
///
/// Both variants are local and recoverable; callers that need the original
/// API's single "not found" outcome can map them to the same response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// An endpoint name is absent from the current map.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Both endpoints exist but nothing connects them.
    #[error("No route from '{from}' to '{to}'")]
    NoRoute {
        /// Requested start node.
        from: String,
        /// Requested destination node.
        to: String,
    },
}

/// Result type alias for routing operations.
pub type Result<T> = std::result::Result<T, RouteError>;
