//! Error taxonomy for chat request handling
//!
//! Every failure in the request path collapses into one of these variants.
//! The variant payload carries internal detail for logs; the text shown to
//! users comes from [`ChatError::user_message`] so upstream detail is never
//! leaked through the HTTP boundary.

use serde::{Deserialize, Serialize};

/// Result type for chat operations
pub type ChatResult<T> = Result<T, ChatError>;

/// Chat request errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ChatError {
    #[error("message is empty or whitespace-only")]
    EmptyInput,

    #[error("API credential is not configured")]
    MissingConfiguration,

    #[error("upstream request failed: {0}")]
    UpstreamFailure(String),

    #[error("invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ChatError {
    /// The user-facing message for this error.
    ///
    /// Upstream detail is suppressed for everything except `Unknown`, which
    /// mirrors the generic connection-error message shown by the original
    /// widget, detail included.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Message cannot be empty.".to_string(),
            Self::MissingConfiguration => {
                "Server configuration is incomplete. Please contact the administrator.".to_string()
            }
            Self::UpstreamFailure(_) => {
                "Sorry, something went wrong while contacting the AI. Please try again."
                    .to_string()
            }
            Self::InvalidUpstreamResponse(_) => {
                "Sorry, the AI did not return a valid response. Please try again.".to_string()
            }
            Self::Timeout(_) => {
                "Request timeout. Please try again with a shorter question.".to_string()
            }
            Self::Unknown(detail) => {
                format!("⚠️ Oops! A connection/server error occurred. Detail: {detail}")
            }
        }
    }
}
