//! Application configuration
//!
//! Values come from CLI flags, then an optional TOML file, then defaults.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;
use crate::error::ConfigError;

/// Window and display settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial window width in points
    pub window_width: f32,
    /// Initial window height in points
    pub window_height: f32,
    /// Move list starts in ascending order
    pub sort_ascending: bool,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 520.0,
            window_height: 420.0,
            sort_ascending: true,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(path, &contents)
    }

    /// Apply CLI overrides on top of this config
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(width) = cli.width {
            self.window_width = width;
        }
        if let Some(height) = cli.height {
            self.window_height = height;
        }
        if cli.descending {
            self.sort_ascending = false;
        }
        if let Some(filter) = &cli.log_filter {
            self.log_filter = filter.clone();
        }
        self
    }

    /// Resolve the full configuration for a CLI invocation
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.merge_cli(cli))
    }
}
