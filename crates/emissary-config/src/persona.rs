//! Assistant persona
//!
//! Static identity returned verbatim in every successful chat response so
//! frontends can render the assistant consistently.

use serde::{Deserialize, Serialize};

/// The assistant's public identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default = "default_id")]
    pub id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_name")]
    pub display_name: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_personality")]
    pub personality: String,
    /// First message shown in a fresh transcript
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            id: default_id(),
            name: default_name(),
            display_name: default_name(),
            avatar: default_avatar(),
            tone: default_tone(),
            description: default_description(),
            personality: default_personality(),
            greeting: default_greeting(),
        }
    }
}

fn default_id() -> String {
    "career-ai-assistant".to_string()
}

fn default_name() -> String {
    "Career AI Assistant".to_string()
}

fn default_avatar() -> String {
    "🤖".to_string()
}

fn default_tone() -> String {
    "Professional, friendly, and informative".to_string()
}

fn default_description() -> String {
    "Personal AI assistant answering questions about the candidate's CV and career experience."
        .to_string()
}

fn default_personality() -> String {
    "Helpful and knowledgeable about the candidate's career and skills".to_string()
}

fn default_greeting() -> String {
    "Hello! I'm your personal AI assistant. Feel free to ask anything about the candidate's \
     experience and skills!"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_persona_fills_in_defaults() {
        let persona: Persona = toml::from_str(
            r#"
            name = "Ada's Assistant"
            "#,
        )
        .expect("parses");
        assert_eq!(persona.name, "Ada's Assistant");
        assert_eq!(persona.avatar, "🤖");
        assert!(!persona.greeting.is_empty());
    }
}
