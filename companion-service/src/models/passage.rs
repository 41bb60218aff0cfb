use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A Bible reference as typed by the user, e.g. `Romans 8:28`.
///
/// Only constructed through [`PassageQuery::parse`], so a value always
/// holds non-blank text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageQuery(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("A passage query (q) is required.")]
pub struct EmptyPassage;

impl PassageQuery {
    pub fn parse(raw: Option<&str>) -> Result<Self, EmptyPassage> {
        match raw.map(str::trim) {
            Some(passage) if !passage.is_empty() => Ok(Self(passage.to_string())),
            _ => Err(EmptyPassage),
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

/// Query string accepted by both passage endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PassageParams {
    pub q: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureResponse {
    pub passage_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextResponse {
    pub context_text: String,
}
