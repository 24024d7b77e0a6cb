//! Gallery configuration.
//!
//! Configuration is read once at startup from an optional JSON file. Every
//! field has a default, so a partial file (or none at all) is fine. Nothing
//! is ever written back.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Startup settings for the gallery window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Initial inner window size in points
    pub window_size: [f32; 2],
    /// Window title
    pub title: String,
    /// Name of the theme to apply
    pub theme: String,
    /// Number of card columns in the grid
    pub columns: usize,
    /// Catalog file; the built-in catalog is used when absent
    pub catalog: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            window_size: [1280.0, 800.0],
            title: "Flowers".to_string(),
            theme: crate::theme::DEFAULT_THEME.to_string(),
            columns: crate::grid_layout::DEFAULT_COLUMNS,
            catalog: None,
        }
    }
}

impl GalleryConfig {
    /// Parses a configuration from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// A relative `catalog` path in the file is resolved against the
    /// directory containing the configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json_str(&json)?;
        if let (Some(catalog), Some(dir)) = (config.catalog.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Checks values serde cannot rule out on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }
}
