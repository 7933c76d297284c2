pub mod routes;
pub mod server;
pub mod services;

mod error;

pub use error::ApiError;
pub use server::{build_router, start_server};
pub use services::{ChatReply, ChatService};
