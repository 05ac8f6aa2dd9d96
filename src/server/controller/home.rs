use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        page::{HomeDto, NoticesPageDto, ResearchPageDto},
    },
    server::{
        error::AppError,
        middleware::session::FlashSession,
        model::{notice::Notice, research_paper::ResearchPaper},
        service::{notice::NoticeService, research_paper::ResearchPaperService},
        state::AppState,
    },
};

/// Tag for grouping public page endpoints in OpenAPI documentation
pub static PUBLIC_TAG: &str = "public";

/// Home page.
///
/// Returns the five most recently created notices and any pending flash messages.
#[utoipa::path(
    get,
    path = "/",
    tag = PUBLIC_TAG,
    responses(
        (status = 200, description = "Latest notices", body = HomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let notices = NoticeService::new(&state.db).get_latest().await?;
    let flash = FlashSession::new(&session).take().await?;

    Ok((
        StatusCode::OK,
        Json(HomeDto {
            notices: notices.into_iter().map(Notice::into_dto).collect(),
            flash,
        }),
    ))
}

/// All notices, newest first.
#[utoipa::path(
    get,
    path = "/notices",
    tag = PUBLIC_TAG,
    responses(
        (status = 200, description = "All notices", body = NoticesPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn notices(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let notices = NoticeService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(NoticesPageDto {
            title: "All Notices".to_string(),
            notices: notices.into_iter().map(Notice::into_dto).collect(),
        }),
    ))
}

/// All research papers, newest first.
#[utoipa::path(
    get,
    path = "/research",
    tag = PUBLIC_TAG,
    responses(
        (status = 200, description = "All research papers", body = ResearchPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn research(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let papers = ResearchPaperService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ResearchPageDto {
            research: papers.into_iter().map(ResearchPaper::into_dto).collect(),
        }),
    ))
}
