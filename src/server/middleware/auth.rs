//! Per-request admin authentication.
//!
//! `AuthGuard` checks the session for a logged-in admin. Handlers normally receive the
//! result through the `Admin` extractor, so the authentication context is injected into
//! the handler instead of being looked up ad hoc.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires a logged-in admin.
    ///
    /// # Returns
    /// - `Ok(Admin)` - Session belongs to the admin
    /// - `Err(AppError::AuthErr(AuthError::NotLoggedIn))` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn require(&self) -> Result<Admin, AppError> {
        let Some(username) = AuthSession::new(self.session).get_admin().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        Ok(Admin { username })
    }
}

/// Authenticated admin for the current request.
///
/// Extracting it from a request without an admin session rejects with a redirect to
/// the login page before the handler (or any body extractor) runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub username: String,
}

impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::InternalError(msg.to_string()))?;

        AuthGuard::new(&session).require().await
    }
}
