//! Configuration for the Emissary chat service.
//!
//! One TOML file (every section optional, everything has a default) plus the
//! `GOOGLE_API_KEY` environment credential. Context documents are loaded once
//! at startup by [`ContextDocument::load`]; a missing or unreadable document
//! falls back to a built-in default string rather than failing startup.

mod context;
mod persona;

pub use context::{ContextDocument, FALLBACK_CONTEXT};
pub use persona::Persona;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable carrying the Generative Language API credential
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Errors from configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub persona: Persona,
}

impl Config {
    /// Load configuration from a TOML file, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// The API credential from the environment, if set and non-empty.
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// HTTP server bind settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Generation request parameters for the upstream model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the Generative Language API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Upper bound on the outbound call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f32 {
    1.0
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_top_k() -> u32 {
    40
}

fn default_top_p() -> f32 {
    0.95
}

fn default_timeout_secs() -> u64 {
    60
}

/// Paths of the static context documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// System instructions document
    #[serde(default = "default_system_prompt_path")]
    pub system_prompt_path: PathBuf,
    /// Domain facts document prepended to every query
    #[serde(default = "default_career_facts_path")]
    pub career_facts_path: PathBuf,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            system_prompt_path: default_system_prompt_path(),
            career_facts_path: default_career_facts_path(),
        }
    }
}

fn default_system_prompt_path() -> PathBuf {
    PathBuf::from("data/system_prompt.txt")
}

fn default_career_facts_path() -> PathBuf {
    PathBuf::from("data/career_context.txt")
}
