mod chat;
mod health;

pub use chat::{chat_routes, ChatRequest, ChatResponsePayload, ChatState};
pub use health::health_routes;
