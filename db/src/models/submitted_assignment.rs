use crate::outcome::UpsertOutcome;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, TransactionTrait};
use serde::{Deserialize, Serialize};

/// Lifecycle of a submission. The only transition is `Pending` → `Completed`, on grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "submission_status_enum"
)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Waiting for a grader.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Mark and feedback have been recorded.
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str = match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Completed => "completed",
        };
        write!(f, "{}", status_str)
    }
}

/// A user's submission against an assignment.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submitted_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The assignment being answered.
    pub assignment_id: Option<i64>,
    /// Submitter's email.
    pub user: Option<String>,
    /// Assignment title at submission time.
    pub title: Option<String>,
    /// Assignment's maximum marks at submission time.
    pub marks: Option<f64>,
    pub pdf_link: Option<String>,
    pub note: Option<String>,
    pub status: SubmissionStatus,
    /// Mark awarded by the grader.
    pub my_mark: Option<f64>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Client-supplied part of a new submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubmission {
    pub assignment_id: Option<i64>,
    pub user: Option<String>,
    pub title: Option<String>,
    pub marks: Option<f64>,
    pub pdf_link: Option<String>,
    pub note: Option<String>,
}

impl Model {
    /// Stores a new submission. The status always starts as `Pending`.
    pub async fn create(db: &DatabaseConnection, new: NewSubmission) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active = ActiveModel {
            assignment_id: Set(new.assignment_id),
            user: Set(new.user),
            title: Set(new.title),
            marks: Set(new.marks),
            pdf_link: Set(new.pdf_link),
            note: Set(new.note),
            status: Set(SubmissionStatus::Pending),
            my_mark: Set(None),
            feedback: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active.insert(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Every submission still waiting for a grade.
    pub async fn find_pending(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Status.eq(SubmissionStatus::Pending))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Every submission made by `email`, in any status.
    pub async fn find_by_submitter(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::User.eq(email))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Records a grade and marks submission `id` as completed, creating it when missing.
    pub async fn grade(
        db: &DatabaseConnection,
        id: i64,
        my_mark: f64,
        feedback: &str,
    ) -> Result<UpsertOutcome, DbErr> {
        let txn = db.begin().await?;
        let now = Utc::now();

        let outcome = match Entity::find_by_id(id).one(&txn).await? {
            Some(existing) => {
                let unchanged = existing.status == SubmissionStatus::Completed
                    && existing.my_mark == Some(my_mark)
                    && existing.feedback.as_deref() == Some(feedback);

                if unchanged {
                    UpsertOutcome::updated(false)
                } else {
                    let mut active: ActiveModel = existing.into();
                    active.my_mark = Set(Some(my_mark));
                    active.feedback = Set(Some(feedback.to_owned()));
                    active.status = Set(SubmissionStatus::Completed);
                    active.updated_at = Set(now);
                    active.update(&txn).await?;
                    UpsertOutcome::updated(true)
                }
            }
            None => {
                let active = ActiveModel {
                    id: Set(id),
                    assignment_id: Set(None),
                    user: Set(None),
                    title: Set(None),
                    marks: Set(None),
                    pdf_link: Set(None),
                    note: Set(None),
                    status: Set(SubmissionStatus::Completed),
                    my_mark: Set(Some(my_mark)),
                    feedback: Set(Some(feedback.to_owned())),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                let inserted = active.insert(&txn).await?;
                UpsertOutcome::inserted(inserted.id)
            }
        };

        txn.commit().await?;
        Ok(outcome)
    }
}
