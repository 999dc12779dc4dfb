//! Response types of the reviews API.
//!
//! Only includes fields that are actually used; serde ignores unknown
//! fields, so the richer payloads produced by `populate=*` deserialize
//! without modeling every relation.

use serde::Deserialize;

/// A review entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Numeric entry ID.
    pub id: u64,
    /// Opaque document identifier used in item URLs.
    pub document_id: String,
    /// Review title.
    pub title: String,
    /// Review body text.
    #[serde(default)]
    pub body: Option<String>,
    /// Star rating.
    #[serde(default)]
    pub rating: Option<u8>,
    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Collection response: `data` plus pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsResponse {
    /// The review entries.
    pub data: Vec<Review>,
    /// Response metadata.
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Single-item response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewResponse {
    /// The review entry.
    pub data: Review,
}

/// Response metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    /// Pagination details for collection responses.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-based).
    pub page: u32,
    /// Entries per page.
    pub page_size: u32,
    /// Total number of pages.
    pub page_count: u32,
    /// Total number of entries.
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_collection_response() {
        let json = r#"{
            "data": [
                {
                    "id": 4,
                    "documentId": "abc123",
                    "title": "Great coffee",
                    "body": "Would come back.",
                    "rating": 5,
                    "createdAt": "2025-01-01T00:00:00.000Z",
                    "updatedAt": "2025-01-02T00:00:00.000Z"
                }
            ],
            "meta": {
                "pagination": {"page": 1, "pageSize": 25, "pageCount": 1, "total": 1}
            }
        }"#;

        let response: ReviewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);

        let review = &response.data[0];
        assert_eq!(review.id, 4);
        assert_eq!(review.document_id, "abc123");
        assert_eq!(review.title, "Great coffee");
        assert_eq!(review.body.as_deref(), Some("Would come back."));
        assert_eq!(review.rating, Some(5));

        let pagination = response.meta.unwrap().pagination.unwrap();
        assert_eq!(pagination.total, 1);
        assert_eq!(pagination.page_size, 25);
    }

    #[test]
    fn test_deserialize_item_response_with_minimal_fields() {
        let json = r#"{"data": {"id": 1, "documentId": "xyz789", "title": "Ok"}}"#;

        let response: ReviewResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.document_id, "xyz789");
        assert_eq!(response.data.body, None);
        assert_eq!(response.data.rating, None);
        assert_eq!(response.data.created_at, None);
    }
}
