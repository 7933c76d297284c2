//! `emissary serve` - run the HTTP chat server

use anyhow::Result;
use std::sync::Arc;

use emissary_config::{Config, ContextDocument};
use emissary_llm::create_provider;
use emissary_web::{start_server, ChatService};

pub async fn run(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let context = ContextDocument::load(&config.context);

    let provider = create_provider(&config.generation);
    if provider.is_none() {
        tracing::warn!(
            "{} is not set; chat requests will fail with a configuration error",
            emissary_config::API_KEY_ENV
        );
    }

    let service = ChatService::new(provider, context, config.persona.clone());
    start_server(&config.server, Arc::new(service)).await?;
    Ok(())
}
