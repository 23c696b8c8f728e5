//! # Auth Routes Module
//!
//! Defines the `/auth` route group: issuing the session cookie and clearing it.
//!
//! ## Routes
//! - `POST /auth/access-token` → sign a token for the given identity and set it as a cookie
//! - `POST /auth/user/logOut` → clear the session cookie

use axum::{Router, routing::post};
use util::state::AppState;

pub mod post;

use post::{issue_access_token, log_out};

/// Builds the `/auth` route group. Neither route requires a session.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/access-token", post(issue_access_token))
        .route("/user/logOut", post(log_out))
}
