mod config;
mod errors;
mod export;
mod extraction;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod template_engine;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::TemplateLibrary;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config);

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    let state = build_state(&config)?;

    // Browser editor runs on a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// `RUST_LOG` syntax wins when it parses; otherwise only this crate logs, at the configured level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), config.rust_log))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_state(config: &Config) -> Result<AppState> {
    if config.llm_api_key.is_none() {
        warn!("LLM_API_KEY is not set; vision and extraction endpoints will return errors");
    }
    let llm = LlmClient::new(config.llm_api_url.clone(), config.llm_api_key.clone())?;
    info!(
        "LLM endpoint {} (vision model: {}, text model: {})",
        config.llm_api_url, config.vision_model, config.text_model
    );

    let templates = TemplateLibrary::builtin();
    info!("Loaded {} preset templates", templates.len());

    Ok(AppState {
        config: config.clone(),
        llm: Arc::new(llm),
        templates: Arc::new(templates),
    })
}
