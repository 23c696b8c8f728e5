//! HTTP route entry point for the `/api/v1` namespace.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/auth` → session cookie issuing and clearing
//! - `/assignments` → assignment listing, lookup, editing and grading
//! - `/user` → submissions, assignment creation and owner-only deletion
//!
//! Protected routes carry `require_authenticated` as a route layer.

use axum::Router;
use util::state::AppState;

use crate::routes::{
    assignments::assignment_routes, auth::auth_routes, health::health_routes, user::user_routes,
};

pub mod assignments;
pub mod auth;
pub mod common;
pub mod health;
pub mod user;

/// Builds the complete route tree for `/api/v1`, bound to the given state.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/assignments", assignment_routes(app_state.clone()))
        .nest("/user", user_routes(app_state.clone()))
        .with_state(app_state)
}
