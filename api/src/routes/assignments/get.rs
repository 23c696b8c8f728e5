use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::assignment::Model as AssignmentModel;
use serde::Deserialize;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::assignments::common::{AssignmentPage, AssignmentResponse};
use crate::routes::common::database_error;

const DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;
/// Largest page whose offset still fits a signed 64-bit `OFFSET`.
const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    /// 1-based page and page size, clamped to sane bounds.
    fn bounds(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).clamp(1, MAX_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        (page, limit)
    }
}

/// GET /api/v1/assignments
///
/// Lists assignments in id order.
///
/// ### Query Parameters
/// - `page` (optional, default `1`)
/// - `limit` (optional, default `20`, at most `100`)
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "total": 42, "result": [ { "id": 1, "title": "Algebra", ... } ] },
///   "message": "Assignments retrieved successfully"
/// }
/// ```
pub async fn list_assignments(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let (page, limit) = query.bounds();

    match AssignmentModel::find_page(app_state.db(), page, limit).await {
        Ok((items, total)) => {
            let data = AssignmentPage {
                total,
                result: items.into_iter().map(AssignmentResponse::from).collect(),
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Assignments retrieved successfully")),
            )
        }
        Err(e) => database_error("Failed to list assignments", e),
    }
}

/// GET /api/v1/assignments/{assignment_id}
///
/// Fetches a single assignment. Requires a session cookie.
///
/// ### Responses
/// - `200 OK` with the assignment
/// - `401 Unauthorized` without a valid session
/// - `404 Not Found` when no assignment has this id
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> impl IntoResponse {
    match AssignmentModel::find_by_id(app_state.db(), assignment_id).await {
        Ok(Some(assignment)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Assignment not found")),
        ),
        Err(e) => database_error("Failed to fetch assignment", e),
    }
}
