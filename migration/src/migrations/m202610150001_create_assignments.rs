use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610150001_create_assignments"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("assignments"))
                    .if_not_exists()
                    // Plain rowid alias, no AUTOINCREMENT: upserts may claim any id, including
                    // i64::MAX, and SQLite must still find a free rowid for the next insert.
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("title")).string().null())
                    .col(ColumnDef::new(Alias::new("thumbnail")).string().null())
                    .col(ColumnDef::new(Alias::new("description")).text().null())
                    .col(ColumnDef::new(Alias::new("marks")).double().null())
                    .col(
                        ColumnDef::new(Alias::new("difficulty_level"))
                            .enumeration(
                                Alias::new("difficulty_level_enum"),
                                vec![
                                    Alias::new("easy"),
                                    Alias::new("medium"),
                                    Alias::new("hard"),
                                ],
                            )
                            .null(),
                    )
                    .col(ColumnDef::new(Alias::new("date")).timestamp().null())
                    .col(ColumnDef::new(Alias::new("user")).string().null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("assignments")).to_owned())
            .await
    }
}
