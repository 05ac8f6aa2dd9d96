//! Admin authentication against the configured credentials.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use std::sync::Arc;
use tower_sessions::Session;

use crate::server::{
    error::{config::ConfigError, AppError},
    middleware::session::AuthSession,
};

/// Username and argon2 password hash of the single admin account.
///
/// Cheap to clone; the hash is shared behind an `Arc`.
#[derive(Clone)]
pub struct AdminCredentials {
    username: Arc<str>,
    password_hash: Arc<str>,
}

impl AdminCredentials {
    /// Creates credentials from an existing PHC-formatted argon2 hash.
    ///
    /// # Returns
    /// - `Ok(AdminCredentials)` - Hash parsed successfully
    /// - `Err(ConfigError::InvalidPasswordHash)` - Hash is not a valid PHC string
    pub fn new(username: impl Into<String>, password_hash: String) -> Result<Self, ConfigError> {
        PasswordHash::new(&password_hash)
            .map_err(|e| ConfigError::InvalidPasswordHash(e.to_string()))?;

        Ok(Self {
            username: Arc::from(username.into()),
            password_hash: Arc::from(password_hash),
        })
    }

    /// Creates credentials by hashing a plaintext password with a fresh salt.
    pub fn from_password(username: impl Into<String>, password: &str) -> Result<Self, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        Ok(Self {
            username: Arc::from(username.into()),
            password_hash: Arc::from(hash),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Checks a submitted username and password.
    ///
    /// The password is verified even when the username does not match.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let hash = match PasswordHash::new(&self.password_hash) {
            Ok(hash) => hash,
            Err(err) => {
                tracing::error!("failed to parse admin password hash: {}", err);
                return false;
            }
        };

        let password_ok = Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok();

        password_ok && username == &*self.username
    }
}

/// Establishes and clears the admin session.
pub struct AuthService<'a> {
    credentials: &'a AdminCredentials,
    session: &'a Session,
}

impl<'a> AuthService<'a> {
    pub fn new(credentials: &'a AdminCredentials, session: &'a Session) -> Self {
        Self {
            credentials,
            session,
        }
    }

    /// Logs the admin in when the credentials match.
    ///
    /// # Returns
    /// - `Ok(true)` - Credentials matched, session now authenticated
    /// - `Ok(false)` - Credentials rejected, session unchanged
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn login(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if !self.credentials.verify(username, password) {
            tracing::info!("Rejected admin login for username '{}'", username);
            return Ok(false);
        }

        AuthSession::new(self.session)
            .set_admin(self.credentials.username())
            .await?;

        tracing::info!("Admin '{}' logged in", username);

        Ok(true)
    }

    /// Removes all session state, logged in or not.
    pub async fn logout(&self) {
        AuthSession::new(self.session).clear().await;
    }
}
