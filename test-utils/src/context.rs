use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test environment holding an in-memory SQLite connection and a session.
///
/// Both are created lazily on first access and live as long as the context.
#[derive(Default)]
pub struct TestContext {
    /// Connection to the in-memory database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same in-memory database, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty context with no connection yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Executes the provided CREATE TABLE statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates a session store sharing the test database pool.
    ///
    /// The session table is created on every call; the migration is idempotent.
    ///
    /// # Returns
    /// - `Ok(SqliteStore)` - Migrated store, usable with `SessionManagerLayer`
    /// - `Err(TestError::Database)` - Failed to connect or create the session table
    pub async fn session_store(&mut self) -> Result<SqliteStore, TestError> {
        let db = self.database().await?;

        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        store
            .migrate()
            .await
            .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

        Ok(store)
    }

    /// Gets or creates a standalone session backed by the test database.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    ///
    /// session.insert("auth:admin", "admin").await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = self.session_store().await?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => unreachable!("session initialized above"),
        }
    }
}
