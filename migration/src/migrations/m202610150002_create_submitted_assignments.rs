use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610150002_create_submitted_assignments"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("submitted_assignments"))
                    .if_not_exists()
                    // Plain rowid alias, no AUTOINCREMENT: upserts may claim any id, including
                    // i64::MAX, and SQLite must still find a free rowid for the next insert.
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().primary_key())
                    // Plain reference: grading may upsert a submission before its assignment exists.
                    .col(ColumnDef::new(Alias::new("assignment_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("user")).string().null())
                    .col(ColumnDef::new(Alias::new("title")).string().null())
                    .col(ColumnDef::new(Alias::new("marks")).double().null())
                    .col(ColumnDef::new(Alias::new("pdf_link")).string().null())
                    .col(ColumnDef::new(Alias::new("note")).text().null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(
                                Alias::new("submission_status_enum"),
                                vec![Alias::new("pending"), Alias::new("completed")],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Alias::new("my_mark")).double().null())
                    .col(ColumnDef::new(Alias::new("feedback")).text().null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("submitted_assignments"))
                    .to_owned(),
            )
            .await
    }
}
