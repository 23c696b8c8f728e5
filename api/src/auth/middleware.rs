use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts, State},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::info;
use util::state::AppState;

use crate::auth::claims::AuthUser;

/// Logs each request's metadata on arrival, then its status and latency once the
/// handler has answered. CORS preflight `OPTIONS` requests pass through unlogged.
///
/// The caller is shown by email when the session cookie verifies, `anonymous` otherwise.
///
/// ### Usage:
/// ```ignore
/// let app = api::app(state.clone()).layer(from_fn_with_state(state, log_request));
/// ```
pub async fn log_request(
    State(app_state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        let req = Request::from_parts(parts, body);
        return next.run(req).await;
    }

    let user = AuthUser::from_request_parts(&mut parts, &app_state)
        .await
        .ok()
        .map(|AuthUser(c)| c.email);

    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &app_state)
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &app_state)
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();

    info!(
        method = %method,
        path = %path,
        ip = %addr.ip(),
        user = user.as_deref().unwrap_or("anonymous"),
        origin = origin.as_deref().unwrap_or("unknown"),
        user_agent = user_agent.as_deref().unwrap_or("unknown"),
        "Incoming request"
    );

    let started = Instant::now();
    let response = next.run(Request::from_parts(parts, body)).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}
