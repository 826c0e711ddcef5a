// Optional YAML configuration

use crate::todo::{DEFAULT_DESCRIPTION, DEFAULT_TITLE, IdStrategy};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backing file used when neither the command line nor the config names one
pub const DEFAULT_FILE: &str = "todos.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backing JSON file; relative paths resolve against the working directory
    pub file: Option<PathBuf>,
    pub id_strategy: IdStrategy,
    pub default_title: String,
    pub default_description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            id_strategy: IdStrategy::default(),
            default_title: DEFAULT_TITLE.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl Config {
    /// `<config dir>/todostore/config.yaml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("todostore").join("config.yaml"))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&content).with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(file = ?path, ?config, "Loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Pick the backing file: command line first, then config, then [`DEFAULT_FILE`]
    pub fn resolve_file(&self, cli_file: Option<&Path>) -> PathBuf {
        cli_file
            .map(Path::to_path_buf)
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
    }
}
