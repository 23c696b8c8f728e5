use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::{models::assignment::Model as AssignmentModel, outcome::DeleteOutcome};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{DeleteResult, database_error};

/// DELETE /api/v1/user/delete-assignment/{assignment_id}
///
/// Deletes an assignment, but only for the identity that created it.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "acknowledged": true, "deletedCount": 1 },
///   "message": "Assignment deleted successfully"
/// }
/// ```
/// - `403 Forbidden` when the caller is not the creator
/// - `404 Not Found` when no assignment has this id
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    match AssignmentModel::delete_owned(app_state.db(), assignment_id, user.email()).await {
        Ok(DeleteOutcome::Deleted) => {
            tracing::info!(assignment_id, owner = %user.email(), "Assignment deleted");
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    DeleteResult {
                        acknowledged: true,
                        deleted_count: 1,
                    },
                    "Assignment deleted successfully",
                )),
            )
        }
        Ok(DeleteOutcome::NotOwner) => (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("forbidden access")),
        ),
        Ok(DeleteOutcome::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Assignment not found")),
        ),
        Err(e) => database_error("Failed to delete assignment", e),
    }
}
