//! Context document loading
//!
//! The system prompt and the career-facts document are concatenated once at
//! process start into an immutable [`ContextDocument`] that the chat service
//! prepends to every user query.

use crate::ContextConfig;

/// Built-in context used when the configured documents cannot be read.
pub const FALLBACK_CONTEXT: &str = "You are a personal AI career assistant. \
The career data files could not be loaded. \
Answer only with this basic information: \
the candidate is a full stack developer looking for new opportunities.";

/// Immutable context string prepended to every user query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDocument(String);

impl ContextDocument {
    /// Read and concatenate the configured documents.
    ///
    /// Never fails: when either document is unreadable the built-in fallback
    /// is used instead, with a warning.
    pub fn load(config: &ContextConfig) -> Self {
        let system_prompt = std::fs::read_to_string(&config.system_prompt_path);
        let career_facts = std::fs::read_to_string(&config.career_facts_path);

        match (system_prompt, career_facts) {
            (Ok(prompt), Ok(facts)) => Self(format!("{prompt}\n{facts}")),
            (prompt, facts) => {
                if let Err(err) = &prompt {
                    tracing::warn!(
                        path = %config.system_prompt_path.display(),
                        %err,
                        "failed to read system prompt, using fallback context"
                    );
                }
                if let Err(err) = &facts {
                    tracing::warn!(
                        path = %config.career_facts_path.display(),
                        %err,
                        "failed to read career facts, using fallback context"
                    );
                }
                Self(FALLBACK_CONTEXT.to_string())
            }
        }
    }

    /// Wrap an already-assembled context string. Mainly for tests.
    pub fn from_string(context: impl Into<String>) -> Self {
        Self(context.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
