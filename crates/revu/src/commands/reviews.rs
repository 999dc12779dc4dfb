//! `revu reviews` command implementations.
//!
//! Exercises the backend content API from the terminal, without starting
//! the server.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use revu_backend::{BackendClient, Endpoints, Review};
use revu_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Review inspection commands.
#[derive(Subcommand)]
pub(crate) enum ReviewsCommand {
    /// List all reviews from the backend.
    List(ListArgs),
    /// Show a single review by document identifier.
    Show(ShowArgs),
}

impl ReviewsCommand {
    /// Execute the selected subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(),
            Self::Show(args) => args.execute(),
        }
    }
}

/// Arguments for the reviews list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover revu.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config).
    #[arg(long)]
    backend_url: Option<String>,
}

impl ListArgs {
    fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = backend_client(self.config.as_deref(), self.backend_url)?;

        output.info(&format!(
            "Fetching reviews from {}",
            client.endpoints().base_url()
        ));

        let response = client.list_reviews()?;

        if response.data.is_empty() {
            output.warning("No reviews found");
            return Ok(());
        }

        for review in &response.data {
            output.info(&format_list_line(review));
        }

        let total = response
            .meta
            .and_then(|meta| meta.pagination)
            .map_or(response.data.len() as u64, |pagination| pagination.total);
        output.success(&format!("{total} reviews"));

        Ok(())
    }
}

/// Arguments for the reviews show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Document identifier of the review.
    document_id: String,

    /// Path to configuration file (default: auto-discover revu.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config).
    #[arg(long)]
    backend_url: Option<String>,
}

impl ShowArgs {
    fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = backend_client(self.config.as_deref(), self.backend_url)?;

        let response = client.get_review(&self.document_id)?;
        let review = response.data;

        output.highlight(&review.title);
        output.separator();
        output.info(&format!("Document ID: {}", review.document_id));
        if let Some(rating) = review.rating {
            output.info(&format!("Rating: {rating}/5"));
        }
        if let Some(created_at) = &review.created_at {
            output.info(&format!("Created: {created_at}"));
        }
        if let Some(body) = &review.body {
            output.separator();
            output.info(body);
        }

        Ok(())
    }
}

/// Build a backend client from config file and CLI overrides.
fn backend_client(
    config_path: Option<&Path>,
    backend_url: Option<String>,
) -> Result<BackendClient, CliError> {
    let cli_settings = CliSettings {
        backend_url,
        ..Default::default()
    };
    let config = Config::load(config_path, Some(&cli_settings))?;

    let endpoints = config
        .backend
        .base_url
        .as_deref()
        .map_or_else(Endpoints::default, Endpoints::new);

    Ok(BackendClient::new(endpoints))
}

/// One listing line: identifier, title, rating when present.
fn format_list_line(review: &Review) -> String {
    match review.rating {
        Some(rating) => format!("{}  {} ({rating}/5)", review.document_id, review.title),
        None => format!("{}  {}", review.document_id, review.title),
    }
}
