//! SERP provider client error types.

/// Errors from the SERP provider client.
///
/// The `Display` text of each variant is what callers see in
/// `SearchResponse::error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerpError {
    /// No API token configured. No request was sent.
    #[error("BRIGHTDATA_API_TOKEN not found in environment")]
    MissingCredential,

    /// The provider did not answer within the request timeout.
    #[error("SERP API request timed out ({secs}s)")]
    Timeout { secs: u64 },

    /// The provider answered with a status other than 200.
    ///
    /// `body` holds at most the first 200 characters of the response.
    #[error("SERP API failed: {status} - {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Connection, read or decode fault.
    #[error("SERP API error: {0}")]
    Unexpected(String),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl SerpError {
    /// Stable machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            SerpError::MissingCredential => "MISSING_CREDENTIAL",
            SerpError::Timeout { .. } => "TIMEOUT",
            SerpError::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            SerpError::Unexpected(_) => "UNEXPECTED",
            SerpError::InvalidEndpoint(_) => "INVALID_ENDPOINT",
        }
    }
}
