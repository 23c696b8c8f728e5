use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// In-memory SQLite with both tables created. Each call gets an isolated database,
/// so tests never see each other's assignments or submissions.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory SQLite should always open");

    Migrator::up(&db, None)
        .await
        .expect("assignment and submission migrations should apply cleanly");

    db
}
