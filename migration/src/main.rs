use std::{fs, path::Path, process::ExitCode};
use util::config;

mod runner;

#[tokio::main]
async fn main() -> ExitCode {
    let db_path = config::database_path();
    let args: Vec<String> = std::env::args().collect();

    if is_dsn(&db_path) {
        // Remote or in-memory databases are migrated as-is; `clean` only applies to files.
        return finish(runner::run_all_migrations(&db_path).await);
    }

    let url = format!("sqlite://{}?mode=rwc", db_path);

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
            ExitCode::SUCCESS
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            finish(runner::run_all_migrations(&url).await)
        }
        _ => {
            create_db_dir(&db_path);
            finish(runner::run_all_migrations(&url).await)
        }
    }
}

fn is_dsn(path: &str) -> bool {
    path.starts_with("sqlite:") || path.starts_with("postgres://") || path.starts_with("mysql://")
}

fn finish(result: Result<(), sea_orm::DbErr>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Migration failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }

    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(e) => eprintln!("Failed to delete DB {}: {e}", db_path.display()),
    }
}

fn create_db_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory {}: {e}", parent.display());
        }
    }
}
