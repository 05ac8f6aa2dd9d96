use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, page::AdminDashboardDto},
    server::{
        error::AppError,
        middleware::{auth::Admin, session::FlashSession},
        model::{member::Member, notice::Notice, research_paper::ResearchPaper},
        service::{
            member::MemberService, notice::NoticeService, research_paper::ResearchPaperService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Admin dashboard.
///
/// Lists every member, notice and research paper, newest first, together with the
/// flash messages left by the last admin action.
///
/// # Access Control
/// - `Admin` - Anonymous visitors are redirected to `/login`
#[utoipa::path(
    get,
    path = "/admin",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDashboardDto),
        (status = 303, description = "Not logged in, redirect to the login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    _admin: Admin,
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db).get_all().await?;
    let notices = NoticeService::new(&state.db).get_all().await?;
    let research = ResearchPaperService::new(&state.db).get_all().await?;
    let flash = FlashSession::new(&session).take().await?;

    Ok((
        StatusCode::OK,
        Json(AdminDashboardDto {
            members: members.into_iter().map(Member::into_dto).collect(),
            notices: notices.into_iter().map(Notice::into_dto).collect(),
            research: research.into_iter().map(ResearchPaper::into_dto).collect(),
            flash,
        }),
    ))
}
