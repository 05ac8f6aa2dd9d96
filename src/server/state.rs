//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::auth::AdminCredentials;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `AdminCredentials` keeps its strings behind `Arc`s
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; the only shared mutable resource.
    pub db: DatabaseConnection,

    /// Credentials the login form is checked against.
    pub credentials: AdminCredentials,
}

impl AppState {
    pub fn new(db: DatabaseConnection, credentials: AdminCredentials) -> Self {
        Self { db, credentials }
    }
}
