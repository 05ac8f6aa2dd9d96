use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::server::controller::LOGIN_PATH;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No admin is logged in for this session.
    ///
    /// Gated routes treat this as routing rather than failure: the request is answered
    /// with a redirect to the login page and no action is performed.
    #[error("Admin session required")]
    NotLoggedIn,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 303 See Other to the login page - For `NotLoggedIn`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => Redirect::to(LOGIN_PATH).into_response(),
        }
    }
}
