//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (BRIGHTDATA_*)
//! 2. TOML config file (if BRIGHTDATA_CONFIG_FILE set)
//! 3. Built-in defaults

use chrono::Duration;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_TTL_SECS;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (BRIGHTDATA_*)
/// 2. TOML config file (if BRIGHTDATA_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SERP provider API token.
    ///
    /// Set via BRIGHTDATA_API_TOKEN environment variable.
    /// Checked on every search; its absence is not a load error.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Provider request endpoint.
    ///
    /// Set via BRIGHTDATA_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider zone used to route the request.
    ///
    /// Set via BRIGHTDATA_ZONE environment variable.
    #[serde(default = "default_zone")]
    pub zone: String,

    /// Response format requested from the provider (`json` or raw).
    ///
    /// Set via BRIGHTDATA_SERP_FORMAT environment variable.
    #[serde(default = "default_serp_format")]
    pub serp_format: String,

    /// Search cache TTL in seconds.
    ///
    /// Set via BRIGHTDATA_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via BRIGHTDATA_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.brightdata.com/request".into()
}

fn default_zone() -> String {
    "serp_api3".into()
}

fn default_serp_format() -> String {
    "json".into()
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_TTL_SECS as u64
}

fn default_user_agent() -> String {
    "serp-web/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_base_url(),
            zone: default_zone(),
            serp_format: default_serp_format(),
            cache_ttl_secs: default_cache_ttl_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Cache TTL as a chrono Duration for use with the search cache.
    pub fn cache_ttl(&self) -> Duration {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::seconds(DEFAULT_TTL_SECS))
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `BRIGHTDATA_`
    /// 2. TOML file from `BRIGHTDATA_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("BRIGHTDATA_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("BRIGHTDATA_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Return the API token if one is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the token is unset or empty.
    pub fn require_api_token(&self) -> Result<&str, ConfigError> {
        self.api_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "api_token".into(),
                hint: "Set BRIGHTDATA_API_TOKEN environment variable".into(),
            })
    }
}
