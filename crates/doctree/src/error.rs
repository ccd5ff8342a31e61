//! CLI error types.

use doctree_config::ConfigError;
use doctree_core::{NavError, TreeError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
