//! Scripture gateway backed by the ESV API passage text endpoint.

use super::metrics::record_gateway_call;
use super::{error_for_status, GatewayError};
use crate::config::EsvConfig;
use crate::models::PassageQuery;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::time::Instant;

/// Path of the plain-text passage endpoint, relative to the API base URL.
const PASSAGE_TEXT_PATH: &str = "/v3/passage/text/";

/// Turns a passage reference into verse-numbered plain text.
#[async_trait]
pub trait ScriptureGateway: Send + Sync {
    async fn fetch_passage(&self, passage: &PassageQuery) -> Result<String, GatewayError>;
}

#[derive(Clone)]
pub struct EsvScriptureGateway {
    client: Client,
    config: EsvConfig,
}

impl EsvScriptureGateway {
    pub fn new(client: Client, config: EsvConfig) -> Self {
        Self { client, config }
    }

    fn passage_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            PASSAGE_TEXT_PATH
        )
    }

    async fn request(&self, passage: &PassageQuery) -> Result<String, GatewayError> {
        let response = self
            .client
            .get(self.passage_url())
            .query(&[
                ("q", passage.as_str()),
                ("include-headings", "false"),
                ("include-footnotes", "false"),
                ("include-verse-numbers", "true"),
                ("include-passage-references", "false"),
            ])
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Token {}", self.config.api_key.expose_secret()),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        let payload: PassageTextResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedPayload(e.to_string()))?;

        payload
            .passages
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::NotFound(passage.to_string()))
    }
}

#[async_trait]
impl ScriptureGateway for EsvScriptureGateway {
    async fn fetch_passage(&self, passage: &PassageQuery) -> Result<String, GatewayError> {
        tracing::debug!(passage = %passage, "Requesting passage text from ESV API");

        let started = Instant::now();
        let result = self.request(passage).await;
        record_gateway_call("scripture", result.as_ref().map(|_| ()), started.elapsed());

        if let Err(e) = &result {
            tracing::error!(passage = %passage, error = %e, "Error fetching from ESV API");
        }

        result
    }
}

// ============================================================================
// ESV API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct PassageTextResponse {
    #[serde(default)]
    passages: Vec<String>,
}
