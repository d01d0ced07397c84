//! WeatherChat HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{ResponseComposer, WeatherChatService, WeatherService};
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, OllamaInferenceAdapter, WeatherAdapter, init_tracing, load_api_key,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str =
    "weather_chat_server=info,presentation_http=info,application=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config is loaded before tracing so the log format can come from it
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(config.server.log_format, DEFAULT_LOG_FILTER)
        .context("failed to initialize tracing")?;

    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!("WeatherChat v{} starting", env!("CARGO_PKG_VERSION"));

    let api_key = load_api_key(&config.weather.api_key_file).with_context(|| {
        format!(
            "weather API key is required (set weather.api_key_file, currently {})",
            config.weather.api_key_file.display()
        )
    })?;

    let weather = WeatherAdapter::new(config.weather.client_config(), api_key)
        .context("failed to create weather client")?;
    let inference = OllamaInferenceAdapter::new(config.inference.clone())
        .context("failed to create inference client")?;

    info!(
        weather_url = %config.weather.base_url,
        inference_url = %config.inference.base_url,
        model = %config.inference.default_model,
        narratives = config.composer.enabled,
        "Outbound clients ready"
    );

    let weather_service = Arc::new(WeatherService::new(Arc::new(weather)));
    let composer = Arc::new(
        ResponseComposer::new(Arc::new(inference)).with_enabled(config.composer.enabled),
    );

    let config = Arc::new(config);
    let state = AppState {
        weather_chat: Arc::new(WeatherChatService::new(weather_service, composer)),
        config: Arc::clone(&config),
    };

    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }

    info!("Waiting up to {:?} for connections to close", timeout);
}
