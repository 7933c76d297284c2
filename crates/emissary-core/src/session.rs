//! Chat transcript session
//!
//! Explicit two-state machine behind the chat client: `Idle` accepts one
//! submission, `AwaitingResponse` ignores further input until the response
//! (or an error) lands. The transcript is append-only; only a full reset
//! removes messages.

use std::time::Duration;

use crate::message::{Message, Sender};

/// Delay before the first bubble of a response is shown
pub const FIRST_BUBBLE_DELAY: Duration = Duration::from_millis(300);
/// Delay before each subsequent bubble
pub const NEXT_BUBBLE_DELAY: Duration = Duration::from_millis(500);

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// One chat session: greeting, transcript, and submission gating.
#[derive(Debug, Clone)]
pub struct ChatSession {
    greeting: String,
    messages: Vec<Message>,
    state: SessionState,
    next_id: u64,
}

impl ChatSession {
    /// Start a session holding only the greeting message.
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let mut session = Self {
            greeting,
            messages: Vec::new(),
            state: SessionState::Idle,
            next_id: 1,
        };
        session.push_greeting();
        session
    }

    fn push_greeting(&mut self) {
        let text = self.greeting.clone();
        self.push(text, Sender::Bot);
    }

    fn push(&mut self, text: String, sender: Sender) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message::new(id, text, sender));
        self.messages.last().expect("just pushed")
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Submit user input. Returns the appended user message, or `None` when
    /// the input is empty/whitespace-only or a response is already pending
    /// (the submission is ignored, no state change).
    pub fn submit(&mut self, input: &str) -> Option<&Message> {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.state == SessionState::AwaitingResponse {
            return None;
        }
        self.state = SessionState::AwaitingResponse;
        let text = trimmed.to_string();
        Some(self.push(text, Sender::User))
    }

    /// Append one bot bubble of the pending response.
    pub fn append_bot_bubble(&mut self, text: impl Into<String>) -> &Message {
        self.push(text.into(), Sender::Bot)
    }

    /// Mark the pending response as fully delivered.
    pub fn complete(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Record a failed request as a single warning-prefixed bot message and
    /// return to `Idle` so the session stays recoverable.
    pub fn fail(&mut self, error_text: &str) -> &Message {
        let text = if error_text.contains('⚠') {
            error_text.to_string()
        } else {
            format!("⚠️ {error_text}")
        };
        self.state = SessionState::Idle;
        self.push(text, Sender::Bot)
    }

    /// Clear the transcript back to the initial greeting, from any state.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.next_id = 1;
        self.state = SessionState::Idle;
        self.push_greeting();
    }

    /// Delay to wait before showing bubble `index` of a response.
    pub fn bubble_delay(index: usize) -> Duration {
        if index == 0 {
            FIRST_BUBBLE_DELAY
        } else {
            NEXT_BUBBLE_DELAY
        }
    }
}
