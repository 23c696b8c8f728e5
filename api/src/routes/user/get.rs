use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::submitted_assignment::Model as SubmissionModel;
use serde::Deserialize;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::database_error;
use crate::routes::user::common::SubmissionResponse;

/// GET /api/v1/user/submitted-assignments
///
/// Lists every submission still waiting for a grade. Not paginated.
///
/// ### Responses
/// - `200 OK` with an array of submissions
/// - `401 Unauthorized` without a valid session
pub async fn get_pending_submissions(State(app_state): State<AppState>) -> impl IntoResponse {
    match SubmissionModel::find_pending(app_state.db()).await {
        Ok(submissions) => {
            let data: Vec<SubmissionResponse> =
                submissions.into_iter().map(SubmissionResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Pending submissions retrieved successfully")),
            )
        }
        Err(e) => database_error("Failed to list pending submissions", e),
    }
}

/// GET /api/v1/user/submitted-assignments/{submission_id}
///
/// ### Responses
/// - `200 OK` with the submission
/// - `404 Not Found` when no submission has this id
pub async fn get_submission(
    State(app_state): State<AppState>,
    Path(submission_id): Path<i64>,
) -> impl IntoResponse {
    match SubmissionModel::find_by_id(app_state.db(), submission_id).await {
        Ok(Some(submission)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Submission not found")),
        ),
        Err(e) => database_error("Failed to fetch submission", e),
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitterQuery {
    pub email: Option<String>,
}

/// GET /api/v1/user/my-assignments?email={email}
///
/// Lists every submission made by `email`, which must be the caller's own identity.
///
/// ### Responses
/// - `200 OK` with an array of submissions
/// - `403 Forbidden` when `email` is missing or belongs to someone else
pub async fn get_my_submissions(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<SubmitterQuery>,
) -> impl IntoResponse {
    let email = match query.email.as_deref() {
        Some(email) if email == user.email() => email,
        other => {
            tracing::warn!(caller = %user.email(), requested = ?other, "Submitter mismatch");
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<Vec<SubmissionResponse>>::error("forbidden access")),
            );
        }
    };

    match SubmissionModel::find_by_submitter(app_state.db(), email).await {
        Ok(submissions) => {
            let data: Vec<SubmissionResponse> =
                submissions.into_iter().map(SubmissionResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Submissions retrieved successfully")),
            )
        }
        Err(e) => database_error("Failed to list submissions", e),
    }
}
