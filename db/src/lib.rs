pub mod models;
pub mod outcome;
pub mod test_utils;

use migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use util::config;

/// Opens the database named by `DATABASE_PATH`.
///
/// A value that already looks like a DSN is used as-is; anything else is treated as
/// a SQLite file path whose parent directory is created on demand.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = database_url(&config::database_path());
    tracing::info!(url = %url, "Connecting to database");
    Database::connect(&url).await
}

/// Applies any pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        return path_or_url.to_owned();
    }

    // SQLite won't create intermediate directories.
    if let Some(parent) = Path::new(path_or_url).parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(dir = %parent.display(), error = %e, "Failed to create database directory");
        }
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}
