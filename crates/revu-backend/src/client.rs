//! Sync HTTP client for the reviews API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::info;
use ureq::Agent;

use crate::endpoints::Endpoints;
use crate::error::BackendError;
use crate::types::{ReviewResponse, ReviewsResponse};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Reviews API client.
pub struct BackendClient {
    agent: Agent,
    endpoints: Endpoints,
}

impl BackendClient {
    /// Create a client for the given endpoint set.
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent, endpoints }
    }

    /// The endpoint set this client requests against.
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the review collection.
    pub fn list_reviews(&self) -> Result<ReviewsResponse, BackendError> {
        info!("Fetching reviews from {}", self.endpoints.base_url());
        let response: ReviewsResponse = self.get_json(&self.endpoints.reviews())?;
        info!("Fetched {} reviews", response.data.len());
        Ok(response)
    }

    /// Fetch a single review by document identifier.
    pub fn get_review(&self, document_id: &str) -> Result<ReviewResponse, BackendError> {
        info!("Fetching review {}", document_id);
        self.get_json(&self.endpoints.review(document_id))
    }

    /// GET a URL and deserialize the JSON body.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BackendError> {
        let response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(BackendError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }
}
