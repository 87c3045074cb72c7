use std::sync::Arc;

use tracing::{info, warn};

use travel_planner_backend::{
    app,
    config::AppConfig,
    provider::gemini::{GeminiClient, GeminiConfig},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Arc::new(AppConfig::from_env());

    match &config.gemini_api_key {
        Some(_) => info!("Gemini API key loaded"),
        None => warn!("GEMINI_API_KEY not set, itinerary requests will fail at the provider call"),
    }

    let provider = Arc::new(GeminiClient::new(GeminiConfig {
        api_key: config.gemini_api_key.clone(),
        model: config.gemini_model.clone(),
    }));

    let state = AppState {
        config: config.clone(),
        provider,
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,travel_planner_backend=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
