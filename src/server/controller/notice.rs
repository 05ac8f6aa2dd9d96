use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, notice::AddNoticeForm},
    server::{
        controller::ADMIN_PATH,
        error::AppError,
        middleware::{auth::Admin, session::FlashSession},
        model::notice::CreateNoticeParams,
        service::notice::NoticeService,
        state::AppState,
    },
};

/// Tag for grouping notice endpoints in OpenAPI documentation
pub static NOTICE_TAG: &str = "notice";

/// Adds a notice from the admin panel form.
///
/// # Access Control
/// - `Admin` - Anonymous visitors are redirected to `/login` and nothing is written
#[utoipa::path(
    post,
    path = "/add_notice",
    tag = NOTICE_TAG,
    request_body(content = AddNoticeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Notice added, redirect to the admin panel"),
        (status = 400, description = "Blank title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_notice(
    _admin: Admin,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddNoticeForm>,
) -> Result<impl IntoResponse, AppError> {
    NoticeService::new(&state.db)
        .add(CreateNoticeParams::from_form(form))
        .await?;

    FlashSession::new(&session)
        .success("Notice added successfully!")
        .await?;

    Ok(Redirect::to(ADMIN_PATH))
}

#[utoipa::path(
    get,
    path = "/delete_notice/{id}",
    tag = NOTICE_TAG,
    params(("id" = i32, Path, description = "Notice ID")),
    responses(
        (status = 303, description = "Redirect to the admin panel"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notice(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    NoticeService::new(&state.db).delete(id).await?;

    Ok(Redirect::to(ADMIN_PATH))
}
