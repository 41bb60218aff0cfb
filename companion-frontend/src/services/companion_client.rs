//! Client for the passage API (`/api/scripture`, `/api/context`).

use crate::config::ApiSettings;
use crate::models::passage::{ContextBody, ErrorBody, PassageQuery, PassageResult, ScriptureBody};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Could not reach passage API: {0}")]
    Connection(String),

    #[error("Passage API request timed out")]
    Timeout,

    #[error("Passage API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from passage API: {0}")]
    Decode(String),
}

impl ClientError {
    /// True when the server itself could not be reached.
    pub fn is_connection(&self) -> bool {
        matches!(self, ClientError::Connection(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Connection(err.to_string())
        }
    }
}

pub struct CompanionClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl CompanionClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            timeout: settings.request_timeout(),
        })
    }

    pub async fn fetch_scripture(&self, passage: &PassageQuery) -> Result<String, ClientError> {
        let body: ScriptureBody = self.get_json("/api/scripture", passage).await?;
        body.passage_text
            .ok_or_else(|| ClientError::Decode("missing passageText".to_string()))
    }

    pub async fn fetch_context(&self, passage: &PassageQuery) -> Result<String, ClientError> {
        let body: ContextBody = self.get_json("/api/context", passage).await?;
        body.context_text
            .ok_or_else(|| ClientError::Decode("missing contextText".to_string()))
    }

    /// Issue both requests concurrently and wait for both, whatever their
    /// outcome. Each call is bounded by its own timeout.
    pub async fn fetch_passage(&self, passage: &PassageQuery) -> PassageResult {
        let (scripture, context) = tokio::join!(
            self.bounded(self.fetch_scripture(passage)),
            self.bounded(self.fetch_context(passage)),
        );

        if let Err(e) = &scripture {
            tracing::warn!(passage = %passage, error = %e, "Scripture request failed");
        }
        if let Err(e) = &context {
            tracing::warn!(passage = %passage, error = %e, "Context request failed");
        }

        PassageResult { scripture, context }
    }

    async fn bounded<F>(&self, call: F) -> Result<String, ClientError>
    where
        F: Future<Output = Result<String, ClientError>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(ClientError::Timeout))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        passage: &PassageQuery,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("q", passage.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
