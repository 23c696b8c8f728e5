//! # User Routes Module
//!
//! Defines the `/user` route group, covering submissions plus assignment creation and
//! owner-only deletion.
//!
//! ## Routes
//! - `GET    /user/submitted-assignments` → every pending submission (session required)
//! - `GET    /user/submitted-assignments/{submission_id}` → one submission (session required)
//! - `GET    /user/my-assignments?email=` → the caller's own submissions (session required)
//! - `POST   /user/create-assignment` → create an assignment
//! - `POST   /user/submit-assignment` → submit an answer, always starting as `pending`
//! - `DELETE /user/delete-assignment/{assignment_id}` → delete an assignment the caller created

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use util::state::AppState;

use crate::auth::guards::require_authenticated;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

use delete::delete_assignment;
use get::{get_my_submissions, get_pending_submissions, get_submission};
use post::{create_assignment, submit_assignment};

pub fn user_routes(app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/submitted-assignments", get(get_pending_submissions))
        .route("/submitted-assignments/{submission_id}", get(get_submission))
        .route("/my-assignments", get(get_my_submissions))
        .route("/delete-assignment/{assignment_id}", delete(delete_assignment))
        .route_layer(from_fn_with_state(app_state, require_authenticated));

    Router::new()
        .route("/create-assignment", post(create_assignment))
        .route("/submit-assignment", post(submit_assignment))
        .merge(protected)
}
