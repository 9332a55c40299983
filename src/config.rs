//! Configuration parsing, validation, and environment overrides.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::{AppError, Result};

/// Environment variable that overrides the configured API base URL.
pub const BASE_URL_ENV: &str = "WORKBASKET_BASE_URL";

/// Connection settings for the work-item REST API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ApiConfig {
    /// Base URL of the work-item API, e.g. `http://localhost:8080/api`.
    pub base_url: String,
    /// Request timeout in seconds for every round trip.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Worklist presentation defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct WorklistConfig {
    /// Page size used when a view does not specify its own.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

impl Default for WorklistConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Global configuration parsed from `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// API connection settings.
    pub api: ApiConfig,
    /// Worklist defaults.
    #[serde(default)]
    pub worklist: WorklistConfig,
}

impl GlobalConfig {
    /// Parse configuration from a TOML string, apply environment
    /// overrides, and validate.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the TOML is malformed or a value
    /// fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("cannot read config: {err}")))?;
        Self::from_toml_str(&text)
    }

    /// Build a configuration for a base URL with every other value at its
    /// default. Used by the CLI `--base-url` shortcut and by tests.
    #[must_use]
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                timeout_seconds: default_timeout_seconds(),
            },
            worklist: WorklistConfig::default(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var(BASE_URL_ENV) {
            if url.trim().is_empty() {
                warn!(var = BASE_URL_ENV, "ignoring empty base URL override");
            } else {
                self.api.base_url = url;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(AppError::Config(
                "api.timeout_seconds must be at least 1".into(),
            ));
        }
        if self.worklist.page_size == 0 {
            return Err(AppError::Config(
                "worklist.page_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
