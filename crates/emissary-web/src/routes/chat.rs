//! Chat API endpoint

use crate::services::ChatService;
use crate::ApiError;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{SecondsFormat, Utc};
use emissary_config::Persona;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for chat routes
pub type ChatState = Arc<ChatService>;

/// Request body for chat messages.
///
/// A missing `message` field is treated like an empty message so the client
/// gets the regular 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Successful response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponsePayload {
    pub message: String,
    pub message_parts: Vec<String>,
    pub success: bool,
    pub character: Persona,
    pub response_length: usize,
    pub total_parts: usize,
    pub timestamp: String,
}

pub fn chat_routes(state: ChatState) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .with_state(state)
}

async fn chat_handler(
    State(service): State<ChatState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponsePayload>, ApiError> {
    let reply = service.send_message(&request.message).await?;

    let total_parts = reply.parts.len();
    Ok(Json(ChatResponsePayload {
        response_length: reply.message.chars().count(),
        message: reply.message,
        message_parts: reply.parts,
        success: true,
        character: service.persona().clone(),
        total_parts,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
