//! User configuration loaded from `config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calculator::Operation;

/// Settings read from `<config_dir>/bigcalc/config.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Copy every result to the clipboard.
    pub copy_results: bool,
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Operation run for a one-shot expression without `--op`.
    pub default_operation: Operation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_results: false,
            log_filter: "warn".to_string(),
            default_operation: Operation::Equals,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bigcalc").join("config.toml"))
    }

    /// Load the config from `path`, or from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse config from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
