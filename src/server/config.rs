use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Minimum length of `SESSION_SECRET`, the size of a cookie signing key.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Secret the session cookie is signed with. A random key is used when unset.
    pub session_secret: Option<String>,

    pub admin_username: String,
    /// Argon2 PHC hash of the admin password. The default password is used when unset.
    pub admin_password_hash: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr_raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr_raw.clone()))?;

        let session_secret = var("SESSION_SECRET");
        if let Some(secret) = &session_secret {
            if secret.len() < MIN_SESSION_SECRET_LEN {
                return Err(ConfigError::SessionSecretTooShort {
                    min: MIN_SESSION_SECRET_LEN,
                    actual: secret.len(),
                }
                .into());
            }
        }

        Ok(Self {
            database_url,
            bind_addr,
            session_secret,
            admin_username: var("ADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password_hash: var("ADMIN_PASSWORD_HASH"),
        })
    }
}
