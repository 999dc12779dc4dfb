//! Navigation API endpoint.
//!
//! Returns the navigation links for the review site: every route whose path
//! has no parameters. The details route needs a concrete identifier and is
//! reached from the review list, not from navigation.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation link items.
    items: Vec<NavItemResponse>,
}

/// Navigation link item.
#[derive(Serialize)]
struct NavItemResponse {
    /// Route name.
    name: String,
    /// Link target path.
    path: String,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    let items = state
        .routes
        .routes()
        .iter()
        .filter(|route| !route.pattern().has_params())
        .map(|route| NavItemResponse {
            name: route.name().to_owned(),
            path: route.pattern().as_str().to_owned(),
        })
        .collect();

    Json(NavigationResponse { items })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_navigation_response_serialization() {
        let response = NavigationResponse {
            items: vec![NavItemResponse {
                name: "reviews".to_owned(),
                path: "/reviews".to_owned(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["name"], "reviews");
        assert_eq!(json["items"][0]["path"], "/reviews");
    }

    #[test]
    fn test_static_routes_of_site_table() {
        let table = revu_routes::RouteTable::site_default();
        let static_paths: Vec<&str> = table
            .routes()
            .iter()
            .filter(|route| !route.pattern().has_params())
            .map(|route| route.pattern().as_str())
            .collect();

        assert_eq!(static_paths, vec!["/", "/reviews", "/about", "/contact"]);
    }
}
