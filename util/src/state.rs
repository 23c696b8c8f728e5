//! Application state container shared across Axum route handlers.
//!
//! This struct holds the long-lived resources: the database connection that backs
//! both stores, and the token service used by the authorization layer.
//! It is cloned into handlers via Axum's `State<T>` extractor.

use crate::token::TokenService;
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    tokens: TokenService,
}

impl AppState {
    /// Creates a new `AppState` from an open connection and a configured token service.
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns the token service used to issue and verify sessions.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for shutdown, where ownership is required to close the pool.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
