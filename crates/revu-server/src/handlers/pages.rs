//! Pages API endpoint.
//!
//! Resolves the request path against the route table and returns the
//! matched view's JSON payload. Views backed by the content API fetch their
//! data per request through the blocking client, driven on the blocking
//! thread pool.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use revu_backend::Review;
use revu_routes::View;
use serde::Serialize;
use tokio::task;

use crate::error::ServerError;
use crate::handlers::to_route_path;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    /// Matched route metadata.
    meta: PageMeta,
    /// View payload.
    page: PageData,
}

/// Matched route metadata.
#[derive(Serialize)]
struct PageMeta {
    /// Route name.
    route: String,
    /// Resolved request path.
    path: String,
    /// Parameters bound from the path.
    params: BTreeMap<String, String>,
}

/// View payload, tagged by view identifier.
#[derive(Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
enum PageData {
    /// Landing page.
    Home,
    /// Review list.
    Reviews {
        /// The fetched reviews.
        reviews: Vec<ReviewItem>,
    },
    /// Single review.
    ReviewDetails {
        /// The fetched review.
        review: ReviewItem,
    },
    /// About page.
    About,
    /// Contact page.
    Contact,
}

/// Review item for JSON responses.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewItem {
    /// Opaque document identifier.
    document_id: String,
    /// Review title.
    title: String,
    /// Review body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    /// Star rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<u8>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl From<Review> for ReviewItem {
    fn from(review: Review) -> Self {
        Self {
            document_id: review.document_id,
            title: review.title,
            body: review.body,
            rating: review.rating,
            created_at: review.created_at,
        }
    }
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl("/".to_owned(), state).await
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl(to_route_path(&path), state).await
}

/// Shared implementation for page resolution.
async fn get_page_impl(
    path: String,
    state: Arc<AppState>,
) -> Result<Json<PageResponse>, ServerError> {
    let (route_name, view, params) = {
        let resolved = state
            .routes
            .resolve(&path)
            .ok_or_else(|| ServerError::PageNotFound(path.clone()))?;

        let params: BTreeMap<String, String> = resolved
            .params
            .iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();

        (resolved.route.name().to_owned(), resolved.route.view(), params)
    };

    let page = match view {
        View::Home => PageData::Home,
        View::About => PageData::About,
        View::Contact => PageData::Contact,
        View::Reviews => {
            let backend_state = Arc::clone(&state);
            let response = task::spawn_blocking(move || backend_state.backend.list_reviews())
                .await
                .map_err(|e| ServerError::Internal(e.to_string()))??;

            PageData::Reviews {
                reviews: response.data.into_iter().map(ReviewItem::from).collect(),
            }
        }
        View::ReviewDetails => {
            // The site pattern binds the identifier as `id`
            let document_id = params
                .get("id")
                .ok_or_else(|| ServerError::Internal("route bound no id parameter".to_owned()))?
                .clone();

            let backend_state = Arc::clone(&state);
            let response =
                task::spawn_blocking(move || backend_state.backend.get_review(&document_id))
                    .await
                    .map_err(|e| ServerError::Internal(e.to_string()))??;

            PageData::ReviewDetails {
                review: ReviewItem::from(response.data),
            }
        }
    };

    Ok(Json(PageResponse {
        meta: PageMeta {
            route: route_name,
            path,
            params,
        },
        page,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_response_serialization_static_view() {
        let response = PageResponse {
            meta: PageMeta {
                route: "home".to_owned(),
                path: "/".to_owned(),
                params: BTreeMap::new(),
            },
            page: PageData::Home,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["meta"]["route"], "home");
        assert_eq!(json["meta"]["path"], "/");
        assert_eq!(json["page"]["view"], "home");
    }

    #[test]
    fn test_page_response_serialization_review_details() {
        let mut params = BTreeMap::new();
        params.insert("id".to_owned(), "abc123".to_owned());

        let response = PageResponse {
            meta: PageMeta {
                route: "review-details".to_owned(),
                path: "/review/abc123".to_owned(),
                params,
            },
            page: PageData::ReviewDetails {
                review: ReviewItem {
                    document_id: "abc123".to_owned(),
                    title: "Great coffee".to_owned(),
                    body: Some("Would come back.".to_owned()),
                    rating: Some(5),
                    created_at: None,
                },
            },
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["meta"]["params"]["id"], "abc123");
        assert_eq!(json["page"]["view"], "review-details");
        assert_eq!(json["page"]["review"]["documentId"], "abc123");
        assert_eq!(json["page"]["review"]["rating"], 5);
        // createdAt omitted when None
        assert!(json["page"]["review"].get("createdAt").is_none());
    }

    #[test]
    fn test_review_item_from_backend_review() {
        let review: Review = serde_json::from_str(
            r#"{"id": 7, "documentId": "xyz789", "title": "Ok", "rating": 3}"#,
        )
        .unwrap();

        let item = ReviewItem::from(review);
        assert_eq!(item.document_id, "xyz789");
        assert_eq!(item.title, "Ok");
        assert_eq!(item.rating, Some(3));
        assert_eq!(item.body, None);
    }
}
