//! Core domain types for the Emissary chat assistant.
//!
//! This crate is I/O-free. It holds the message/transcript model, the
//! two-state chat session machine, the reply segmentation algorithm, and the
//! error taxonomy shared by the provider, web, and CLI crates.

pub mod error;
pub mod message;
pub mod segment;
pub mod session;

pub use error::{ChatError, ChatResult};
pub use message::{Message, Sender};
pub use segment::{split_into_bubbles, BubbleLimits};
pub use session::{ChatSession, SessionState};
