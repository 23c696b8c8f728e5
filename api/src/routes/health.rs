use crate::response::ApiResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};
use util::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/v1/health
///
/// Liveness probe for load balancers and deploy scripts. Touches neither the database
/// nor the token service, so it answers `200` with `"data": "OK"` whenever the process
/// is serving.
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
