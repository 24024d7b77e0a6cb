//! Error types for catalog and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse a flower catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share an id; ids key the card textures.
    #[error("duplicate flower id {0}")]
    DuplicateId(u32),
}

/// Failure to read or parse a gallery configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("grid needs at least one column")]
    ZeroColumns,
}
