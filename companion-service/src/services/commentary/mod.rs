//! Commentary gateway: fixed prompt in, model-authored markdown out.

pub mod prompt;
pub mod providers;

use super::GatewayError;
use crate::models::PassageQuery;
use prompt::build_commentary_prompt;
use providers::TextProvider;
use std::sync::Arc;

/// Long-lived handle around the configured text model.
#[derive(Clone)]
pub struct CommentaryGateway {
    provider: Arc<dyn TextProvider>,
}

impl CommentaryGateway {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate commentary for `passage`. The text is returned as the model
    /// produced it; its markdown structure is not checked.
    pub async fn generate_commentary(&self, passage: &PassageQuery) -> Result<String, GatewayError> {
        let prompt = build_commentary_prompt(passage);
        self.provider.generate(&prompt).await
    }
}
