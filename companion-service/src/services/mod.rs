//! Upstream gateways: scripture text and generated commentary.

pub mod commentary;
pub mod metrics;
pub mod mock;
pub mod scripture;

pub use commentary::CommentaryGateway;
pub use scripture::{EsvScriptureGateway, ScriptureGateway};

use std::time::Duration;
use thiserror::Error;

/// Failure talking to an upstream API. Never retried.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("No passage found for '{0}'")]
    NotFound(String),

    #[error("Content filtered: {0}")]
    ContentFiltered(String),
}

impl GatewayError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Network(_) => "network",
            GatewayError::Timeout => "timeout",
            GatewayError::Upstream { .. } => "upstream",
            GatewayError::RateLimited => "rate_limited",
            GatewayError::MalformedPayload(_) => "malformed",
            GatewayError::NotFound(_) => "not_found",
            GatewayError::ContentFiltered(_) => "filtered",
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        // URLs may carry credentials; keep them out of logged error text.
        let err = err.without_url();
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::MalformedPayload(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

/// Shared HTTP client for both gateways, with the upstream timeout applied
/// to every request.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("companion-service/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GatewayError::Network(format!("Failed to create HTTP client: {}", e)))
}

/// Turn a non-2xx response into a [`GatewayError`], keeping the body for the log.
pub(crate) async fn error_for_status(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.as_u16() == 429 {
        return GatewayError::RateLimited;
    }

    GatewayError::Upstream {
        status: status.as_u16(),
        body,
    }
}
