use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Crate configuration.
///
/// Usually constructed programmatically via [`Config::new`]; [`Config::load`]
/// reads the same shape from a YAML file for embedders that keep backend
/// settings on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub api: ApiConfig,
  /// How many transactions each "view more" step adds (and the size of the
  /// first page load).
  #[serde(default = "default_page_size")]
  pub page_size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// Base URL of the transactions backend, e.g. `https://api.example.com/v1`.
  pub base_url: String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_page_size() -> u64 {
  5
}

fn default_timeout_secs() -> u64 {
  30
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}: {source}")]
  Io {
    path: String,
    source: std::io::Error,
  },
  #[error("failed to parse config file {path}: {source}")]
  Parse {
    path: String,
    source: serde_yaml::Error,
  },
}

impl Config {
  /// Create a configuration with defaults for everything but the base URL.
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      api: ApiConfig {
        base_url: base_url.into(),
        timeout_secs: default_timeout_secs(),
      },
      page_size: default_page_size(),
    }
  }

  /// Load configuration from a YAML file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
      path: path.display().to_string(),
      source: e,
    })?;

    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
      path: path.display().to_string(),
      source: e,
    })
  }
}
