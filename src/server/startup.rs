use time::Duration;
use tower_sessions::{cookie::Key, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    service::auth::AdminCredentials,
};

const DEFAULT_ADMIN_PASSWORD: &str = "1234";

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr(_))` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Session records live in the same SQLite database as the club data. The session
/// cookie is signed with a key derived from `SESSION_SECRET`, or a random key when the
/// secret is unset (sessions then end on restart).
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr(_))` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, tower_sessions::service::SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let key = match &config.session_secret {
        Some(secret) => Key::from(secret.as_bytes()),
        None => {
            tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
            Key::generate()
        }
    };

    Ok(session_layer(session_store, key))
}

/// Builds the session layer used by the router for a given store and signing key.
pub fn session_layer(
    store: SqliteStore,
    key: Key,
) -> SessionManagerLayer<SqliteStore, tower_sessions::service::SignedCookie> {
    SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key)
}

/// Resolves the admin credentials from configuration.
///
/// Falls back to the default password, hashed at startup, when no hash is configured.
pub fn admin_credentials(config: &Config) -> Result<AdminCredentials, AppError> {
    match &config.admin_password_hash {
        Some(hash) => Ok(AdminCredentials::new(&config.admin_username, hash.clone())?),
        None => {
            tracing::warn!(
                "ADMIN_PASSWORD_HASH not set, using the default admin password; set it before deploying"
            );
            AdminCredentials::from_password(&config.admin_username, DEFAULT_ADMIN_PASSWORD)
        }
    }
}
