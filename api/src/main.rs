use api::auth::middleware::log_request;
use axum::middleware::from_fn_with_state;
use std::net::SocketAddr;
use std::process::ExitCode;
use tracing_appender::rolling;
use util::{config, state::AppState, token::TokenService};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    // Set up dependencies
    let tokens = match TokenService::from_config() {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::error!(error = %e, "ACCESS_TOKEN_SECRET must be set");
            eprintln!("Startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            eprintln!("Startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = db::migrate(&db).await {
        tracing::error!(error = %e, "Failed to apply migrations");
        eprintln!("Startup failed: {e}");
        return ExitCode::FAILURE;
    }

    let app_state = AppState::new(db, tokens);

    // Build app router
    let app = api::app(app_state.clone())
        .layer(from_fn_with_state(app_state.clone(), log_request));

    // Start server
    let addr = format!("{}:{}", config::host(), config::port());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %addr, "Failed to bind");
            eprintln!("Failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Starting {} on http://{}",
        config::project_name(),
        addr
    );
    tracing::info!(addr = %addr, env = %config::env(), "Server listening");

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    if let Err(e) = app_state.db_clone().close().await {
        tracing::warn!(error = %e, "Failed to close database cleanly");
    }

    match served {
        Ok(()) => {
            tracing::info!("Server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Server crashed");
            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
