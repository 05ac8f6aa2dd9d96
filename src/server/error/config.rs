use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `SESSION_SECRET` is set but too short to derive a cookie signing key.
    #[error("SESSION_SECRET must be at least {min} bytes, got {actual}")]
    SessionSecretTooShort { min: usize, actual: usize },

    /// `ADMIN_PASSWORD_HASH` is not a valid PHC-formatted argon2 hash.
    #[error("ADMIN_PASSWORD_HASH is not a valid password hash: {0}")]
    InvalidPasswordHash(String),

    /// `BIND_ADDR` could not be parsed as a socket address.
    #[error("Invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),
}
