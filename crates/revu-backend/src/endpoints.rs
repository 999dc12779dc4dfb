//! Request URL construction for the reviews API.

/// Base origin of the hosted backend.
pub const DEFAULT_BASE_URL: &str = "https://review-site-backend-h459.onrender.com";

/// Query string asking the API to expand related fields.
const POPULATE_ALL: &str = "populate=*";

/// URL builder for the reviews collection.
///
/// Holds the backend base origin and produces fully-qualified request URLs.
/// Construct one per backend and pass it where requests are made; nothing in
/// this crate reads the origin from global state.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Create an endpoint set for the given base origin.
    ///
    /// A trailing `/` on the origin is trimmed so joined paths never contain
    /// `//`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The backend base origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API root under the base origin.
    fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }

    /// URL of the reviews collection, with field expansion requested.
    #[must_use]
    pub fn reviews(&self) -> String {
        format!("{}/reviews?{}", self.api_url(), POPULATE_ALL)
    }

    /// URL of a single review, with field expansion requested.
    ///
    /// `document_id` is inserted into the path verbatim, with no validation
    /// or percent-encoding: callers supply identifiers that are already safe
    /// in a URL path segment. An unsafe identifier produces a URL the remote
    /// service rejects.
    #[must_use]
    pub fn review(&self, document_id: &str) -> String {
        format!("{}/reviews/{}?{}", self.api_url(), document_id, POPULATE_ALL)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reviews_url_is_constant() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.reviews(),
            "https://review-site-backend-h459.onrender.com/api/reviews?populate=*"
        );
    }

    #[test]
    fn test_review_url_embeds_document_id() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.review("xyz789"),
            "https://review-site-backend-h459.onrender.com/api/reviews/xyz789?populate=*"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let endpoints = Endpoints::new("http://localhost:1337/");
        assert_eq!(endpoints.base_url(), "http://localhost:1337");
        assert_eq!(
            endpoints.reviews(),
            "http://localhost:1337/api/reviews?populate=*"
        );
    }

    #[test]
    fn test_review_url_distinct_ids_produce_distinct_urls() {
        let endpoints = Endpoints::default();
        let ids = ["a", "b", "ab", "a1", "1a"];
        for left in ids {
            for right in ids {
                assert_eq!(
                    endpoints.review(left) == endpoints.review(right),
                    left == right,
                    "ids {left:?} and {right:?}"
                );
            }
        }
    }
}
