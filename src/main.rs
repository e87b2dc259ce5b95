//! Idea Validator server entry point.

use idea_validator::adapters::{app_router, provider_from_config, ValidationAppState};
use idea_validator::application::GenerationSettings;
use idea_validator::config::AppConfig;
use idea_validator::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.server)?;
    config.validate()?;

    let ai_provider = provider_from_config(&config.ai)?;
    let info = ai_provider.provider_info();
    let settings = GenerationSettings {
        max_tokens: config.ai.max_tokens,
        temperature: config.ai.temperature,
    };

    let state = ValidationAppState::new(ai_provider, settings);
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        provider = %info.name,
        model = %info.model,
        environment = ?config.server.environment,
        "Idea validator listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
