//! HTTP transport seam for the provider client.
//!
//! `SerpClient` only ever talks to a [`Transport`]; the production
//! implementation is [`ReqwestTransport`].

use async_trait::async_trait;
use reqwest::{Client, header};
use std::time::Duration;
use url::Url;

use super::error::SerpError;
use super::request::ProviderBody;

/// A single outbound provider call.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub endpoint: Url,
    pub api_token: String,
    pub body: ProviderBody,
    pub timeout: Duration,
}

/// Status and body text of a provider reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub status: u16,
    pub body: String,
}

/// Sends provider requests.
///
/// Implementations map their own faults into `SerpError::Timeout` or
/// `SerpError::Unexpected`; status handling is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: &ProviderRequest) -> Result<ProviderReply, SerpError>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, SerpError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| SerpError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, request: &ProviderRequest) -> Result<ProviderReply, SerpError> {
        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                SerpError::Timeout { secs: request.timeout.as_secs() }
            } else {
                SerpError::Unexpected(e.to_string())
            }
        };

        let response = self
            .http
            .post(request.endpoint.clone())
            .header(header::AUTHORIZATION, format!("Bearer {}", request.api_token))
            .timeout(request.timeout)
            .json(&request.body)
            .send()
            .await
            .map_err(map_err)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_err)?;

        Ok(ProviderReply { status, body })
    }
}
