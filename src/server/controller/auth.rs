use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{api::ErrorDto, page::LoginPageDto},
    server::{
        controller::{ADMIN_PATH, HOME_PATH},
        error::AppError,
        middleware::session::{AuthSession, FlashSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page state.
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login page", body = LoginPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_page(session: Session) -> Result<impl IntoResponse, AppError> {
    let logged_in = AuthSession::new(&session).is_authenticated().await?;
    let flash = FlashSession::new(&session).take().await?;

    Ok((StatusCode::OK, Json(LoginPageDto { logged_in, flash })))
}

/// Checks the submitted credentials.
///
/// # Returns
/// - `303 See Other` to `/admin` - Credentials accepted, session logged in
/// - `401 Unauthorized` - Credentials rejected; the body carries the login page with an
///   "Invalid Credentials" message
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to the admin panel"),
        (status = 401, description = "Invalid credentials", body = LoginPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let auth_service = AuthService::new(&state.credentials, &session);

    if auth_service.login(&form.username, &form.password).await? {
        return Ok(Redirect::to(ADMIN_PATH).into_response());
    }

    let flash = FlashSession::new(&session);
    flash.danger("Invalid Credentials").await?;

    Ok((
        StatusCode::UNAUTHORIZED,
        Json(LoginPageDto {
            logged_in: false,
            flash: flash.take().await?,
        }),
    )
        .into_response())
}

/// Clears the session and returns to the home page.
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared, redirect home")
    ),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    AuthService::new(&state.credentials, &session).logout().await;

    Redirect::to(HOME_PATH)
}
