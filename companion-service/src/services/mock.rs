//! In-process gateway doubles for tests and local runs without API keys.

use super::commentary::providers::TextProvider;
use super::scripture::ScriptureGateway;
use super::GatewayError;
use crate::models::PassageQuery;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Reply {
    Echo,
    Text(String),
    NotFound,
    Unavailable,
}

/// Mock scripture gateway that records every passage it is asked for.
pub struct MockScriptureGateway {
    reply: Reply,
    calls: Mutex<Vec<String>>,
}

impl MockScriptureGateway {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    pub fn not_found() -> Self {
        Self::with_reply(Reply::NotFound)
    }

    pub fn failing() -> Self {
        Self::with_reply(Reply::Unavailable)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ScriptureGateway for MockScriptureGateway {
    async fn fetch_passage(&self, passage: &PassageQuery) -> Result<String, GatewayError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(passage.to_string());
        }
        reply_for(&self.reply, passage.as_str())
    }
}

/// Mock text provider that records every prompt it receives.
pub struct MockTextProvider {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Replies with a short markdown document quoting the prompt.
    pub fn echo() -> Self {
        Self::with_reply(Reply::Echo)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    pub fn failing() -> Self {
        Self::with_reply(Reply::Unavailable)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        reply_for(&self.reply, prompt)
    }

    fn model(&self) -> &str {
        "mock"
    }
}

fn reply_for(reply: &Reply, input: &str) -> Result<String, GatewayError> {
    match reply {
        Reply::Echo => Ok(format!("### Mock response\n\n{}", input)),
        Reply::Text(text) => Ok(text.clone()),
        Reply::NotFound => Err(GatewayError::NotFound(input.to_string())),
        Reply::Unavailable => Err(GatewayError::Upstream {
            status: 503,
            body: "mock upstream unavailable".to_string(),
        }),
    }
}
