//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Longest accepted cache TTL (24 hours).
const MAX_CACHE_TTL_SECS: u64 = 86_400;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `cache_ttl_secs` is 0 or exceeds 24 hours
    /// - `base_url`, `zone`, `serp_format` or `user_agent` is empty
    /// - `base_url` is not an absolute URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if self.cache_ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_secs".into(),
                reason: "must not exceed 24 hours (86400s)".into(),
            });
        }

        for (field, value) in [
            ("base_url", &self.base_url),
            ("zone", &self.zone),
            ("serp_format", &self.serp_format),
            ("user_agent", &self.user_agent),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid { field: field.into(), reason: "must not be empty".into() });
            }
        }

        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(ConfigError::Invalid { field: "base_url".into(), reason: format!("not a valid URL: {e}") });
        }

        if !self.serp_format.eq_ignore_ascii_case("json") {
            tracing::warn!(
                serp_format = %self.serp_format,
                "Non-JSON serp_format; provider responses will be treated as raw text"
            );
        }

        Ok(())
    }
}
