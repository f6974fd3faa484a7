//! Board configuration loaded from TOML.

use crate::{BoardError, Dimensions};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Board configuration.
///
/// ```toml
/// rows = 6
/// cols = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Number of columns.
    #[serde(default = "default_cols")]
    cols: usize,
}

#[instrument]
fn default_rows() -> usize {
    Dimensions::STANDARD.rows()
}

#[instrument]
fn default_cols() -> usize {
    Dimensions::STANDARD.cols()
}

/// Errors loading a board configuration.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("Failed to read config file {}: {}", path.display(), source)]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The TOML did not parse.
    #[display("Failed to parse config: {}", _0)]
    #[from]
    Parse(toml::de::Error),

    /// The dimensions are not playable.
    #[display("Invalid board dimensions: {}", _0)]
    #[from]
    Dimensions(BoardError),
}

impl BoardConfig {
    /// Creates a configuration.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parses a configuration from TOML text.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        debug!(rows = config.rows, cols = config.cols, "Parsed board config");
        Ok(config)
    }

    /// Loads a configuration file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(rows = config.rows, cols = config.cols, "Loaded board config");
        Ok(config)
    }

    /// Validated dimensions for this configuration.
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Ok(Dimensions::new(self.rows, self.cols)?)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(default_rows(), default_cols())
    }
}
