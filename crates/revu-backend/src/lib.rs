//! Backend content API client for Revu.
//!
//! The review site stores its content in a remote headless CMS exposing a
//! collection-style REST API. This crate provides:
//! - [`Endpoints`]: pure construction of the request URLs
//! - [`BackendClient`]: a sync HTTP client for the reviews collection
//! - serde models of the JSON responses
//!
//! URL construction and the network calls are deliberately separate:
//! [`Endpoints`] never touches the network, and tests assert on the exact
//! URL text it produces.

mod client;
mod endpoints;
mod error;
mod types;

pub use client::BackendClient;
pub use endpoints::{DEFAULT_BASE_URL, Endpoints};
pub use error::BackendError;
pub use types::{Meta, Pagination, Review, ReviewResponse, ReviewsResponse};
