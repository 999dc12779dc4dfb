//! HTTP server for Revu.
//!
//! This crate provides a native Rust HTTP server using axum, serving the
//! JSON API consumed by the review site frontend:
//! - Page resolution: a request path is matched against the route table and
//!   answered with the matched view's payload
//! - Navigation links derived from the route table
//!
//! Review content is not stored here; the pages that need it fetch it from
//! the backend content API per request.
//!
//! # Quick Start
//!
//! ```ignore
//! use revu_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         backend_url: None,
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (revu-server)
//!                        │
//!                        ├─► /api/pages/{path} ──► RouteTable::resolve
//!                        │        │
//!                        │        └─► reviews views ──► BackendClient ──► content API
//!                        │
//!                        └─► /api/navigation ──► static routes of the table
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use revu_backend::{BackendClient, Endpoints};
use revu_routes::RouteTable;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Backend base URL (`None` uses the built-in origin).
    pub backend_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            backend_url: None,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let endpoints = config
        .backend_url
        .as_deref()
        .map_or_else(Endpoints::default, Endpoints::new);

    tracing::info!(backend = %endpoints.base_url(), "Using backend");

    // Create app state
    let state = Arc::new(AppState {
        routes: RouteTable::site_default(),
        backend: BackendClient::new(endpoints),
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Revu config.
#[must_use]
pub fn server_config_from_config(config: &revu_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        backend_url: config.backend.base_url.clone(),
    }
}
