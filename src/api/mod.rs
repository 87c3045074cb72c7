pub mod health;
pub mod itinerary;

use axum::http::StatusCode;

/// CORS preflight passthrough: every route answers OPTIONS with an empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
