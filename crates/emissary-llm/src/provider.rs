//! Provider abstraction
//!
//! The chat service talks to the upstream model through this trait so tests
//! can substitute a scripted provider for the real HTTP client.

use async_trait::async_trait;
use emissary_config::{Config, GenerationConfig};
use emissary_core::ChatResult;

use crate::gemini::GeminiProvider;

/// One-shot text generation against an upstream model.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a single reply for `prompt`.
    ///
    /// Classifies failures into the shared error taxonomy: timeout, upstream
    /// failure, invalid response. No retries.
    async fn generate_reply(&self, prompt: &str) -> ChatResult<String>;

    fn provider_name(&self) -> &str;
}

/// Build the production provider from configuration.
///
/// Returns `None` when the API credential is absent; the caller surfaces
/// that as a configuration error on each request rather than at startup.
pub fn create_provider(config: &GenerationConfig) -> Option<Box<dyn ChatProvider>> {
    let api_key = Config::api_key()?;
    Some(Box::new(GeminiProvider::new(api_key, config)))
}
