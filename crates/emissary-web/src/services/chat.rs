//! Chat service
//!
//! Orchestrates one request: validate input, check the credential, build the
//! grounded prompt, call the provider once, segment the reply into bubbles.
//! No retries, no caching, no state between requests.

use emissary_config::{ContextDocument, Persona};
use emissary_core::{split_into_bubbles, BubbleLimits, ChatError, ChatResult};
use emissary_llm::ChatProvider;

/// One completed request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// The full cleaned reply text
    pub message: String,
    /// The reply partitioned into bubbles, in reading order
    pub parts: Vec<String>,
}

/// Stateless request handler shared across connections.
pub struct ChatService {
    provider: Option<Box<dyn ChatProvider>>,
    context: ContextDocument,
    persona: Persona,
    limits: BubbleLimits,
}

impl ChatService {
    /// Create the service. `provider` is `None` when the API credential is
    /// missing; requests then fail with a configuration error instead of a
    /// network call.
    pub fn new(
        provider: Option<Box<dyn ChatProvider>>,
        context: ContextDocument,
        persona: Persona,
    ) -> Self {
        Self {
            provider,
            context,
            persona,
            limits: BubbleLimits::default(),
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Handle one user message.
    pub async fn send_message(&self, message: &str) -> ChatResult<ChatReply> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let provider = self
            .provider
            .as_ref()
            .ok_or(ChatError::MissingConfiguration)?;

        let prompt = format!(
            "{}\nUser question: {}",
            self.context.as_str(),
            trimmed
        );

        tracing::debug!(
            provider = provider.provider_name(),
            message_len = trimmed.len(),
            "forwarding chat message"
        );
        let reply = provider.generate_reply(&prompt).await?;
        let parts = split_into_bubbles(&reply, &self.limits);

        Ok(ChatReply {
            message: reply,
            parts,
        })
    }
}
