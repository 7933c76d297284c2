mod chat;

pub use chat::{ChatReply, ChatService};
