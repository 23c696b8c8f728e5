use crate::outcome::{DeleteOutcome, UpsertOutcome};
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, TransactionTrait};
use serde::{Deserialize, Serialize};

/// Difficulty category chosen by the assignment's creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "difficulty_level_enum"
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "hard")]
    Hard,
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        };
        write!(f, "{}", s)
    }
}

/// An assignment definition published by a user.
///
/// Every descriptive field is optional: records may be created from a partial body,
/// or by an edit that targets an id nobody has used yet.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    /// Maximum achievable score.
    pub marks: Option<f64>,
    pub difficulty_level: Option<DifficultyLevel>,
    /// Due date.
    pub date: Option<DateTime<Utc>>,
    /// Creator's email; only this identity may delete the record.
    pub user: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The editable part of an assignment, as replaced wholesale by an edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentFields {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub marks: Option<f64>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub date: Option<DateTime<Utc>>,
}

impl AssignmentFields {
    fn apply(self, active: &mut ActiveModel) {
        active.title = Set(self.title);
        active.thumbnail = Set(self.thumbnail);
        active.description = Set(self.description);
        active.marks = Set(self.marks);
        active.difficulty_level = Set(self.difficulty_level);
        active.date = Set(self.date);
    }
}

impl Model {
    /// Current values of the editable fields.
    pub fn fields(&self) -> AssignmentFields {
        AssignmentFields {
            title: self.title.clone(),
            thumbnail: self.thumbnail.clone(),
            description: self.description.clone(),
            marks: self.marks,
            difficulty_level: self.difficulty_level,
            date: self.date,
        }
    }

    /// Whether `email` is the recorded creator.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.user.as_deref() == Some(email)
    }

    pub async fn create(
        db: &DatabaseConnection,
        fields: AssignmentFields,
        user: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let mut active = ActiveModel {
            user: Set(user.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        fields.apply(&mut active);

        active.insert(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// One page of assignments in id order, plus the total number of assignments.
    ///
    /// `page` is 1-based; page 0 is treated as page 1. A page that starts past the last
    /// record, including one whose offset would overflow, comes back empty.
    pub async fn find_page(
        db: &DatabaseConnection,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Model>, u64), DbErr> {
        let limit = limit.max(1);
        let page_index = page.saturating_sub(1);
        let total = Entity::find().count(db).await?;

        match page_index.checked_mul(limit) {
            Some(offset) if offset < total => {}
            _ => return Ok((Vec::new(), total)),
        }

        let items = Entity::find()
            .order_by_asc(Column::Id)
            .paginate(db, limit)
            .fetch_page(page_index)
            .await?;

        Ok((items, total))
    }

    /// Replaces the editable fields of assignment `id`, creating it when missing.
    ///
    /// The existence check and the write run in one transaction.
    pub async fn upsert_fields(
        db: &DatabaseConnection,
        id: i64,
        fields: AssignmentFields,
    ) -> Result<UpsertOutcome, DbErr> {
        let txn = db.begin().await?;
        let now = Utc::now();

        let outcome = match Entity::find_by_id(id).one(&txn).await? {
            Some(existing) => {
                if existing.fields() == fields {
                    UpsertOutcome::updated(false)
                } else {
                    let mut active: ActiveModel = existing.into();
                    fields.apply(&mut active);
                    active.updated_at = Set(now);
                    active.update(&txn).await?;
                    UpsertOutcome::updated(true)
                }
            }
            None => {
                let mut active = ActiveModel {
                    id: Set(id),
                    user: Set(None),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                fields.apply(&mut active);
                let inserted = active.insert(&txn).await?;
                UpsertOutcome::inserted(inserted.id)
            }
        };

        txn.commit().await?;
        Ok(outcome)
    }

    /// Deletes assignment `id` only if `owner` created it.
    pub async fn delete_owned(
        db: &DatabaseConnection,
        id: i64,
        owner: &str,
    ) -> Result<DeleteOutcome, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::User.eq(owner))
            .exec(db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(DeleteOutcome::Deleted);
        }

        match Entity::find_by_id(id).one(db).await? {
            Some(_) => Ok(DeleteOutcome::NotOwner),
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}
