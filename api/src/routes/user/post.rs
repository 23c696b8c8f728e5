use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::{
    assignment::Model as AssignmentModel, submitted_assignment::Model as SubmissionModel,
};
use util::state::AppState;
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::assignments::common::AssignmentRequest;
use crate::routes::common::{InsertResult, database_error, validation_failed};
use crate::routes::user::common::SubmissionRequest;

/// POST /api/v1/user/create-assignment
///
/// Creates an assignment. The `user` field records the creator, who alone may delete it.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Algebra",
///   "thumbnail": "https://img.example/algebra.png",
///   "description": "Solve the equations",
///   "marks": 100,
///   "difficultyLevel": "easy",
///   "date": "2025-03-01T12:00:00Z",
///   "user": "creator@example.com"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": { "acknowledged": true, "insertedId": 1 },
///   "message": "Assignment created successfully"
/// }
/// ```
/// - `400 Bad Request` on validation failure
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Json(req): Json<AssignmentRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failed::<InsertResult>(&errors);
    }

    let (fields, user) = req.into_parts();
    match AssignmentModel::create(app_state.db(), fields, user.as_deref()).await {
        Ok(assignment) => {
            tracing::info!(id = assignment.id, "Assignment created");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    InsertResult::new(assignment.id),
                    "Assignment created successfully",
                )),
            )
        }
        Err(e) => database_error("Failed to create assignment", e),
    }
}

/// POST /api/v1/user/submit-assignment
///
/// Stores a submission. Its status always starts as `pending`.
///
/// ### Responses
/// - `201 Created` with `{ "acknowledged": true, "insertedId": ... }`
/// - `400 Bad Request` on validation failure
pub async fn submit_assignment(
    State(app_state): State<AppState>,
    Json(req): Json<SubmissionRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failed::<InsertResult>(&errors);
    }

    match SubmissionModel::create(app_state.db(), req.into()).await {
        Ok(submission) => {
            tracing::info!(id = submission.id, "Submission stored");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    InsertResult::new(submission.id),
                    "Assignment submitted successfully",
                )),
            )
        }
        Err(e) => database_error("Failed to store submission", e),
    }
}
