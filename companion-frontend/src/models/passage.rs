use crate::services::companion_client::ClientError;
use serde::Deserialize;
use std::fmt;

/// A Bible reference as typed by the user. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageQuery(String);

impl PassageQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PassageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a successful `/api/scripture` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureBody {
    #[serde(default)]
    pub passage_text: Option<String>,
}

/// Body of a successful `/api/context` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextBody {
    #[serde(default)]
    pub context_text: Option<String>,
}

/// Body of a 4xx/5xx response from the passage API.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Both halves of one lookup. Each resolves on its own; a failure in one
/// never replaces the other.
#[derive(Debug)]
pub struct PassageResult {
    pub scripture: Result<String, ClientError>,
    pub context: Result<String, ClientError>,
}
