//! SERP provider client.
//!
//! Sends a search through the provider's request endpoint and hands back the
//! unwrapped payload.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://api.brightdata.com/request` (configurable)
//! - **Authentication**: `Authorization: Bearer <token>` header.
//! - **Body**: `{"zone", "url", "format"}` where `url` is the search page to fetch.
//! - **Timeout**: 30s per request, no retries.
//! - **Status**: only HTTP 200 is a success.

pub mod error;
pub mod payload;
pub mod request;
pub mod transport;

pub use error::SerpError;
pub use payload::{raw_payload, unwrap_payload};
pub use request::{DEFAULT_COUNTRY, DEFAULT_NUM_RESULTS, ProviderBody, SearchRequest};
pub use transport::{ProviderReply, ProviderRequest, ReqwestTransport, Transport};

use serde_json::Value;
use serp_core::{AppConfig, truncate_chars};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default provider request endpoint.
const DEFAULT_BASE_URL: &str = "https://api.brightdata.com/request";

/// Default provider zone.
const DEFAULT_ZONE: &str = "serp_api3";

/// Default response format.
const DEFAULT_FORMAT: &str = "json";

/// Provider request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "serp-web/0.1";

/// Characters of a failed response body kept in the error.
const ERROR_BODY_CHARS: usize = 200;

/// Provider client configuration.
#[derive(Debug, Clone)]
pub struct SerpConfig {
    /// API token from BRIGHTDATA_API_TOKEN.
    pub api_token: Option<String>,
    /// Request endpoint (default: https://api.brightdata.com/request).
    pub base_url: String,
    /// Provider zone (default: serp_api3).
    pub zone: String,
    /// Response format (default: json). Anything else is read as raw text.
    pub format: String,
    /// Request timeout (default: 30s).
    pub timeout: Duration,
    /// User-agent string (default: serp-web/0.x).
    pub user_agent: String,
}

impl Default for SerpConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            zone: DEFAULT_ZONE.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&AppConfig> for SerpConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_token: config.api_token.clone(),
            base_url: config.base_url.clone(),
            zone: config.zone.clone(),
            format: config.serp_format.clone(),
            user_agent: config.user_agent.clone(),
            ..Default::default()
        }
    }
}

impl SerpConfig {
    /// Whether the provider is asked for JSON.
    pub fn is_json_format(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// SERP provider client.
#[derive(Clone)]
pub struct SerpClient {
    config: SerpConfig,
    endpoint: Url,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for SerpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("zone", &self.config.zone)
            .field("format", &self.config.format)
            .finish_non_exhaustive()
    }
}

impl SerpClient {
    /// Create a client backed by reqwest.
    pub fn new(config: SerpConfig) -> Result<Self, SerpError> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(config: SerpConfig, transport: Arc<dyn Transport>) -> Result<Self, SerpError> {
        let endpoint = Url::parse(&config.base_url)
            .map_err(|e| SerpError::InvalidEndpoint(format!("{}: {e}", config.base_url)))?;

        Ok(Self { config, endpoint, transport })
    }

    /// Create a client from the application configuration.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, SerpError> {
        Self::new(SerpConfig::from(config))
    }

    pub fn config(&self) -> &SerpConfig {
        &self.config
    }

    /// The configured API token.
    ///
    /// Returns `SerpError::MissingCredential` if it is unset or empty.
    pub fn credential(&self) -> Result<&str, SerpError> {
        self.config
            .api_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(SerpError::MissingCredential)
    }

    /// Fetch the search page for `req` and return the unwrapped payload.
    ///
    /// No request is sent when the credential is missing.
    pub async fn fetch(&self, req: &SearchRequest) -> Result<Value, SerpError> {
        let api_token = self.credential()?.to_string();

        let request = ProviderRequest {
            endpoint: self.endpoint.clone(),
            api_token,
            body: ProviderBody {
                zone: self.config.zone.clone(),
                url: req.search_url(),
                format: self.config.format.clone(),
            },
            timeout: self.config.timeout,
        };

        tracing::debug!(query = %truncate_chars(&req.query, 50), zone = %self.config.zone, "searching SERP provider");

        let reply = self.transport.post(&request).await?;
        tracing::debug!(status = reply.status, "SERP provider response status");

        if reply.status != 200 {
            return Err(SerpError::UpstreamStatus {
                status: reply.status,
                body: truncate_chars(&reply.body, ERROR_BODY_CHARS),
            });
        }

        let decoded = if self.config.is_json_format() {
            serde_json::from_str(&reply.body).map_err(|e| SerpError::Unexpected(e.to_string()))?
        } else {
            raw_payload(&reply.body)
        };

        Ok(unwrap_payload(decoded))
    }
}
