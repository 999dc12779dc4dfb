//! CLI error types.

use revu_backend::BackendError;
use revu_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Backend(#[from] BackendError),

    #[error("{0}")]
    Server(String),
}
