//! Chat provider implementations for Emissary.
//!
//! Defines the backend-agnostic [`ChatProvider`] trait and the Google
//! Generative Language (`generateContent`) implementation used in
//! production.

pub mod gemini;
mod provider;

pub use gemini::GeminiProvider;
pub use provider::{create_provider, ChatProvider};
