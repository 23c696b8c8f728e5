use db::models::submitted_assignment::{
    Model as SubmissionModel, NewSubmission, SubmissionStatus,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /user/submit-assignment`. A client-supplied `status` is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub assignment_id: Option<i64>,
    #[validate(email(message = "Invalid email format"))]
    pub user: Option<String>,
    pub title: Option<String>,
    #[validate(range(min = 0.0, message = "Marks must not be negative"))]
    pub marks: Option<f64>,
    pub pdf_link: Option<String>,
    pub note: Option<String>,
}

impl From<SubmissionRequest> for NewSubmission {
    fn from(req: SubmissionRequest) -> Self {
        Self {
            assignment_id: req.assignment_id,
            user: req.user,
            title: req.title,
            marks: req.marks,
            pdf_link: req.pdf_link,
            note: req.note,
        }
    }
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: i64,
    pub assignment_id: Option<i64>,
    pub user: Option<String>,
    pub title: Option<String>,
    pub marks: Option<f64>,
    pub pdf_link: Option<String>,
    pub note: Option<String>,
    pub status: SubmissionStatus,
    pub my_mark: Option<f64>,
    pub feedback: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SubmissionModel> for SubmissionResponse {
    fn from(s: SubmissionModel) -> Self {
        Self {
            id: s.id,
            assignment_id: s.assignment_id,
            user: s.user,
            title: s.title,
            marks: s.marks,
            pdf_link: s.pdf_link,
            note: s.note,
            status: s.status,
            my_mark: s.my_mark,
            feedback: s.feedback,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}
