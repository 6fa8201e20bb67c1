//! Configuration loading for bing-search-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable BING_SEARCH_CONFIG_PATH
//! 2. ~/.binks/bing-search.toml
//! 3. Default values
//!
//! `BING_SUBSCRIPTION_KEY`, `BING_MKT` and `BING_ENDPOINT` override the file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no Bing subscription key configured (set BING_SUBSCRIPTION_KEY)")]
    MissingSubscriptionKey,
    #[error("invalid Bing endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("market code must not be empty")]
    EmptyMarket,
    #[error("default result count must be greater than zero")]
    ZeroCount,
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bing API configuration
    #[serde(default)]
    pub bing: BingConfig,
    /// General search configuration
    #[serde(default)]
    pub search: SearchConfig,
}

/// Bing API connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct BingConfig {
    /// Scheme and host of the API, without a trailing path
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Value of the `Ocp-Apim-Subscription-Key` header
    #[serde(default)]
    pub subscription_key: String,
    /// Market code controlling result language and region
    #[serde(default = "default_market", alias = "bingMkt")]
    pub market: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// General search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result count used when a caller does not ask for one
    #[serde(default = "default_count")]
    pub default_count: u32,
}

fn default_endpoint() -> String {
    "https://api.cognitive.microsoft.com".to_string()
}

fn default_market() -> String {
    "en-US".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "bing-search-mcp/0.1".to_string()
}

fn default_count() -> u32 {
    10
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            subscription_key: String::new(),
            market: default_market(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
        }
    }
}

// Keeps the subscription key out of logs
impl std::fmt::Debug for BingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BingConfig")
            .field("endpoint", &self.endpoint)
            .field("subscription_key", &self.redacted_key())
            .field("market", &self.market)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl BingConfig {
    /// Config pointing at `endpoint` with the given key, defaults elsewhere
    pub fn new(endpoint: impl Into<String>, subscription_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            subscription_key: subscription_key.into(),
            ..Self::default()
        }
    }

    /// Set the market code
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    /// Set the request timeout, in whole seconds
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn has_subscription_key(&self) -> bool {
        !self.subscription_key.trim().is_empty()
    }

    fn redacted_key(&self) -> &'static str {
        if self.has_subscription_key() {
            "<redacted>"
        } else {
            "<unset>"
        }
    }

    /// Check the settings a request depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.has_subscription_key() {
            return Err(ConfigError::MissingSubscriptionKey);
        }
        match url::Url::parse(&self.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidEndpoint(self.endpoint.clone())),
        }
        if self.market.trim().is_empty() {
            return Err(ConfigError::EmptyMarket);
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::load`], reading variables through `lookup`
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config_path = Self::find_config_path(&lookup);

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path specified, using defaults");
            Self::default()
        };

        config.apply_overrides(&lookup);
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bing.validate()?;
        if self.search.default_count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        Ok(())
    }

    fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("BING_SUBSCRIPTION_KEY") {
            self.bing.subscription_key = key;
        }
        if let Some(market) = lookup("BING_MKT") {
            self.bing.market = market;
        }
        if let Some(endpoint) = lookup("BING_ENDPOINT") {
            self.bing.endpoint = endpoint;
        }
    }

    /// Find the configuration file path
    fn find_config_path(lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        // 1. Check environment variable
        if let Some(path) = lookup("BING_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.binks/bing-search.toml
        if let Some(home) = lookup("HOME") {
            let path = PathBuf::from(home).join(".binks").join("bing-search.toml");
            return Some(path);
        }

        None
    }
}
