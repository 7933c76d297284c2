//! Google Generative Language chat provider

use async_trait::async_trait;
use emissary_config::GenerationConfig;
use emissary_core::{ChatError, ChatResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::provider::ChatProvider;

/// Provider calling the `generateContent` endpoint.
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    top_k: u32,
    top_p: f32,
    timeout: Duration,
}

impl GeminiProvider {
    /// Create a provider from the generation configuration.
    pub fn new(api_key: String, config: &GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            top_k: config.top_k,
            top_p: config.top_p,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationParameters {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
                top_k: self.top_k,
                top_p: self.top_p,
            },
        }
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    async fn generate_reply(&self, prompt: &str) -> ChatResult<String> {
        let response = self
            .client
            .post(self.request_url())
            .json(&self.build_request(prompt))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout(self.timeout.as_secs())
                } else {
                    ChatError::Unknown(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %body, "generateContent returned an error status");
            return Err(ChatError::UpstreamFailure(format!(
                "generateContent returned {status}"
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            ChatError::InvalidUpstreamResponse(format!("failed to parse response body: {e}"))
        })?;

        let candidates = body
            .candidates
            .filter(|candidates| !candidates.is_empty())
            .ok_or_else(|| {
                ChatError::InvalidUpstreamResponse("response has no candidates".to_string())
            })?;

        // A candidate with no text part yields an empty reply, which the
        // segmenter turns into a single empty bubble downstream.
        let text = candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .and_then(|parts| parts.into_iter().next())
            .and_then(|part| part.text)
            .unwrap_or_default();

        Ok(text.trim().to_string())
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// generateContent wire types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationParameters {
    temperature: f32,
    max_output_tokens: u32,
    top_k: u32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
