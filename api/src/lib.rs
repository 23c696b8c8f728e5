pub mod auth;
pub mod response;
pub mod routes;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_TYPE},
    },
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use util::{config, state::AppState};

/// Builds the full application: the greeting at `/`, the versioned API under
/// `/api/v1`, and the CORS policy.
///
/// Request logging is layered on by `main`, since it needs the peer address.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::routes(app_state))
        .layer(cors_layer(&config::cors_origins()))
}

async fn root() -> &'static str {
    "Assignments API is running"
}

/// Credentialed CORS for an explicit list of origins. Unparseable origins are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
}
