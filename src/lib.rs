pub mod api;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod provider;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::config::{AppConfig, ALLOWED_ORIGINS};
use crate::provider::TextProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn TextProvider>,
}

/// Build the service router. CORS is applied uniformly to all routes:
/// origins limited to the development allow-list, methods GET/POST/PUT/DELETE,
/// headers Content-Type/Authorization.
pub fn app(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .map(|origin| HeaderValue::from_static(origin))
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/api/generate-itinerary",
            post(api::itinerary::generate_itinerary).options(api::preflight),
        )
        .route("/health", get(api::health::health_check).options(api::preflight))
        .route("/test-cors", get(api::health::test_cors).options(api::preflight))
        .layer(cors)
        .with_state(state)
}
