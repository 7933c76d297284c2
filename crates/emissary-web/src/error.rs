//! HTTP error mapping
//!
//! Every [`ChatError`] leaves the API as a `{ "message": ... }` body with
//! the status the error class calls for. Internal detail stays in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use emissary_core::ChatError;
use serde_json::json;

/// Wrapper turning a [`ChatError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ChatError);

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            ChatError::EmptyInput => StatusCode::BAD_REQUEST,
            ChatError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            ChatError::MissingConfiguration
            | ChatError::UpstreamFailure(_)
            | ChatError::InvalidUpstreamResponse(_)
            | ChatError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "chat request failed");
        } else {
            tracing::debug!(error = %self.0, "chat request rejected");
        }
        (status, Json(json!({ "message": self.0.user_message() }))).into_response()
    }
}
