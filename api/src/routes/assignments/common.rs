//! Request and response DTOs for assignments.

use chrono::{DateTime, Utc};
use db::models::assignment::{AssignmentFields, DifficultyLevel, Model as AssignmentModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of both assignment creation and the full edit.
///
/// `user` is honoured only on creation; an edit never changes the creator.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Marks must not be negative"))]
    pub marks: Option<f64>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub date: Option<DateTime<Utc>>,
    #[validate(email(message = "Invalid email format"))]
    pub user: Option<String>,
}

impl AssignmentRequest {
    pub fn into_parts(self) -> (AssignmentFields, Option<String>) {
        let fields = AssignmentFields {
            title: self.title,
            thumbnail: self.thumbnail,
            description: self.description,
            marks: self.marks,
            difficulty_level: self.difficulty_level,
            date: self.date,
        };
        (fields, self.user)
    }
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub id: i64,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub marks: Option<f64>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub date: Option<String>,
    pub user: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssignmentModel> for AssignmentResponse {
    fn from(a: AssignmentModel) -> Self {
        Self {
            id: a.id,
            title: a.title,
            thumbnail: a.thumbnail,
            description: a.description,
            marks: a.marks,
            difficulty_level: a.difficulty_level,
            date: a.date.map(|d| d.to_rfc3339()),
            user: a.user,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct AssignmentPage {
    pub total: u64,
    pub result: Vec<AssignmentResponse>,
}

/// Grading body for `PUT /assignments/marking-assignment/{submission_id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    #[validate(range(min = 0.0, message = "Mark must not be negative"))]
    pub my_mark: f64,
    #[serde(default)]
    pub feedback: String,
}
