//! HTTP server assembly

use crate::routes::{chat_routes, health_routes, ChatState};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use axum::http::{header, Method};
use emissary_config::ServerConfig;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_BODY_SIZE_64KB: usize = 64 * 1024;

/// Assemble the application router. Public so tests can drive it with
/// `tower::ServiceExt::oneshot`.
pub fn build_router(state: ChatState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(chat_routes(state))
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_64KB))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: &ServerConfig, state: ChatState) -> std::io::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{e}")))?;

    let app = build_router(state);

    tracing::info!("starting chat server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
