//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `tower_sessions::Session` but exposes only the
//! operations relevant to its concern:
//! - `AuthSession` - Whether (and as whom) the admin is logged in
//! - `FlashSession` - One-shot messages shown on the next rendered page

use tower_sessions::Session;

use crate::{
    model::api::{FlashLevel, FlashMessageDto},
    server::error::AppError,
};

// Session key constants
const SESSION_AUTH_ADMIN: &str = "auth:admin";
const SESSION_FLASH_MESSAGES: &str = "flash:messages";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as logged in for the given admin username.
    ///
    /// The session ID is cycled first so a pre-login session ID cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Admin stored in session
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_admin(&self, username: &str) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_ADMIN, username.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in admin username.
    ///
    /// # Returns
    /// - `Ok(Some(username))` - Admin is logged in
    /// - `Ok(None)` - Anonymous visitor
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_admin(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_ADMIN).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_admin().await?.is_some())
    }

    /// Clears all data from the session, including queued flash messages.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// Flash message queue stored in the session.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Appends a message to the queue.
    pub async fn push(&self, level: FlashLevel, message: impl Into<String>) -> Result<(), AppError> {
        let mut messages: Vec<FlashMessageDto> = self
            .session
            .get(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();

        messages.push(FlashMessageDto {
            level,
            message: message.into(),
        });

        self.session.insert(SESSION_FLASH_MESSAGES, messages).await?;
        Ok(())
    }

    pub async fn success(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.push(FlashLevel::Success, message).await
    }

    pub async fn danger(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.push(FlashLevel::Danger, message).await
    }

    /// Removes and returns all queued messages, oldest first.
    pub async fn take(&self) -> Result<Vec<FlashMessageDto>, AppError> {
        let messages = self
            .session
            .remove(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();
        Ok(messages)
    }
}
