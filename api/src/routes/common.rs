//! Write-result payloads and helpers shared by every route group.

use axum::{Json, http::StatusCode};
use db::outcome::UpsertOutcome;
use sea_orm::DbErr;
use serde::Serialize;
use validator::ValidationErrors;

use crate::response::ApiResponse;

/// Joins every field-level validation message into one line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// `400 Bad Request` carrying the joined validation messages.
pub fn validation_failed<T: Serialize>(
    errors: &ValidationErrors,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(format_validation_errors(errors))),
    )
}

/// Logs a database failure and turns it into `500 Internal Server Error`.
///
/// The driver's message stays in the log; the client only learns that the operation failed.
pub fn database_error<T: Serialize>(
    context: &str,
    err: DbErr,
) -> (StatusCode, Json<ApiResponse<T>>) {
    tracing::error!(error = %err, "{context}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error("Internal server error")),
    )
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: i64,
}

impl InsertResult {
    pub fn new(inserted_id: i64) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<i64>,
}

impl From<UpsertOutcome> for UpdateResult {
    fn from(outcome: UpsertOutcome) -> Self {
        Self {
            acknowledged: true,
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
            upserted_count: u64::from(outcome.upserted_id.is_some()),
            upserted_id: outcome.upserted_id,
        }
    }
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}
