use std::sync::Arc;

use anyhow::Context;
use chat_core::QueryProcessor;
use chat_server::{create_router, AppState, ServerConfig};
use game_catalog::Catalog;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = ServerConfig::default_path();
    let config = ServerConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog_path = Catalog::default_path();
    info!("Loading catalog from: {}", catalog_path.display());
    let catalog = Arc::new(Catalog::load_or_empty(&catalog_path));

    let state = AppState::new(QueryProcessor::with_word_normalizer(catalog));
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!("Chatbot listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
