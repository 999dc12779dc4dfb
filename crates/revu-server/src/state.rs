//! Application state.
//!
//! Shared state for all request handlers.

use revu_backend::BackendClient;
use revu_routes::RouteTable;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Route table resolving request paths to views.
    pub(crate) routes: RouteTable,
    /// Client for the backend content API.
    pub(crate) backend: BackendClient,
}
