//! CLI error types.

use tabset_assets::AssetError;
use tabset_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Asset(#[from] AssetError),

    #[error("Invalid source pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to serialize nodes: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Build(String),

    #[error("{0}")]
    Validation(String),
}
