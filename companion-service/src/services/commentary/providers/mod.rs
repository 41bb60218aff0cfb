//! Text generation providers behind the commentary gateway.

pub mod gemini;

use crate::services::GatewayError;
use async_trait::async_trait;

/// A generative text model reachable with a single synchronous request.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a complete text response for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Name of the model serving requests, for logging.
    fn model(&self) -> &str;
}
