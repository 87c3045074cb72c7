use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::config::{ALLOWED_ORIGINS, SERVICE_NAME, SERVICE_VERSION};
use crate::AppState;

/// Static service metadata. No side effects, no inputs besides method.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "port": state.config.port,
        "cors": "enabled",
    }))
}

pub async fn test_cors() -> Json<Value> {
    Json(serde_json::json!({
        "message": "CORS test successful",
        "allowed_origins": [ALLOWED_ORIGINS[0], ALLOWED_ORIGINS[1]],
    }))
}
