use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{
    assignment::Model as AssignmentModel, submitted_assignment::Model as SubmissionModel,
};
use util::state::AppState;
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::assignments::common::{AssignmentRequest, GradeRequest};
use crate::routes::common::{UpdateResult, database_error, validation_failed};

/// PUT /api/v1/assignments/update-assignment/{assignment_id}
///
/// Replaces title, thumbnail, description, marks, difficulty level and due date.
/// Fields missing from the body are cleared. When no assignment has this id, one is
/// created with it.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "acknowledged": true,
///     "matchedCount": 1,
///     "modifiedCount": 1,
///     "upsertedCount": 0,
///     "upsertedId": null
///   },
///   "message": "Assignment updated successfully"
/// }
/// ```
/// - `400 Bad Request` on validation failure
pub async fn update_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<AssignmentRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failed::<UpdateResult>(&errors);
    }

    let (fields, _) = req.into_parts();
    match AssignmentModel::upsert_fields(app_state.db(), assignment_id, fields).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UpdateResult::from(outcome),
                "Assignment updated successfully",
            )),
        ),
        Err(e) => database_error("Failed to update assignment", e),
    }
}

/// PUT /api/v1/assignments/marking-assignment/{submission_id}
///
/// Records a mark and feedback and moves the submission to `completed`.
///
/// ### Request Body
/// ```json
/// { "myMark": 87.5, "feedback": "Well argued" }
/// ```
///
/// ### Responses
/// - `200 OK` with the update result
/// - `400 Bad Request` when `myMark` is negative
pub async fn grade_submission(
    State(app_state): State<AppState>,
    Path(submission_id): Path<i64>,
    Json(req): Json<GradeRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failed::<UpdateResult>(&errors);
    }

    match SubmissionModel::grade(app_state.db(), submission_id, req.my_mark, &req.feedback).await
    {
        Ok(outcome) => {
            tracing::info!(submission_id, mark = req.my_mark, "Submission graded");
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    UpdateResult::from(outcome),
                    "Submission graded successfully",
                )),
            )
        }
        Err(e) => database_error("Failed to grade submission", e),
    }
}
