use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;
use util::state::AppState;

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint for uptime checks and load balancers.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "status": "OK" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "OK" }))
}
