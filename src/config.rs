use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONFIG_PATH, DEFAULT_PAGE_TYPE, DEFAULT_TIMEOUT_SECS, ENV_API_KEY,
    ENV_BASE_URL,
};
use crate::error::{Result, WidgetError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dy: DyConfig,
}

/// Connection settings for the remote choose endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DyConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
    pub user_id: String,
    pub session_id: String,
    pub page_type: String,
    pub page_location: String,
    pub locale: Option<String>,
}

impl Default for DyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_id: String::new(),
            session_id: String::new(),
            page_type: DEFAULT_PAGE_TYPE.to_string(),
            page_location: String::new(),
            locale: None,
        }
    }
}

impl DyConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Settings required before a request can be sent
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(WidgetError::Config(format!(
                "missing API key: set dy.api_key in {} or {}",
                DEFAULT_CONFIG_PATH, ENV_API_KEY
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(WidgetError::Config("dy.base_url must not be empty".to_string()));
        }
        if self.timeout_seconds == 0 {
            return Err(WidgetError::Config("dy.timeout_seconds must be positive".to_string()));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Read a TOML config file, falling back to defaults when it does not exist,
    /// then apply environment overrides.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            let config_content = fs::read_to_string(path).map_err(|e| {
                WidgetError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
            })?;
            Self::from_toml_str(&config_content)?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply `DY_API_KEY` and `DY_BASE_URL` from `lookup`
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.dy.api_key = api_key;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.dy.base_url = base_url;
        }
        self
    }
}
