//! # Assignments Routes Module
//!
//! Defines the `/assignments` route group.
//!
//! ## Routes
//! - `GET /assignments` → paginated list of assignments
//! - `GET /assignments/{assignment_id}` → a single assignment (session required)
//! - `PUT /assignments/update-assignment/{assignment_id}` → full edit, creating when missing
//! - `PUT /assignments/marking-assignment/{submission_id}` → grade a submission

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, put},
};
use util::state::AppState;

use crate::auth::guards::require_authenticated;

pub mod common;
pub mod get;
pub mod put;

use get::{get_assignment, list_assignments};
use put::{grade_submission, update_assignment};

pub fn assignment_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments))
        .route(
            "/{assignment_id}",
            get(get_assignment).route_layer(from_fn_with_state(app_state, require_authenticated)),
        )
        .route("/update-assignment/{assignment_id}", put(update_assignment))
        .route("/marking-assignment/{submission_id}", put(grade_submission))
}
