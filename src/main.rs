//! Mood journal backend
//!
//! axum service that sends journal entries to a chat-completion LLM and returns
//! the reply as a summary plus a recommendation.

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod shutdown;
mod state;

#[cfg(test)]
mod test_support;

use api::create_api_routes;
use config::{mask_api_key, AppConfig};
use shutdown::shutdown_signal;
use state::create_shared_state;

/// CORS layer for the configured origins; `*` allows any origin
fn build_cors(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mood_journal_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mood journal backend...");

    let config = AppConfig::load().context("failed to load configuration")?;
    match config.api_key() {
        Some(key) => info!("API key loaded: {}", mask_api_key(key)),
        None => warn!("API key not configured; /analyze will return placeholders"),
    }

    let state = create_shared_state(&config).context("failed to create LLM client")?;

    let app = Router::new()
        .merge(create_api_routes(state))
        .layer(build_cors(&config.cors_origins))
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}
