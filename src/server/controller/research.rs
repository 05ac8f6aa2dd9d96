use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, research::AddResearchForm},
    server::{
        controller::ADMIN_PATH,
        error::AppError,
        middleware::{auth::Admin, session::FlashSession},
        model::research_paper::CreateResearchPaperParams,
        service::research_paper::ResearchPaperService,
        state::AppState,
    },
};

/// Tag for grouping research paper endpoints in OpenAPI documentation
pub static RESEARCH_TAG: &str = "research";

/// Adds a research paper from the admin panel form.
///
/// # Access Control
/// - `Admin` - Anonymous visitors are redirected to `/login` and nothing is written
#[utoipa::path(
    post,
    path = "/add_research",
    tag = RESEARCH_TAG,
    request_body(content = AddResearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Paper added, redirect to the admin panel"),
        (status = 400, description = "Blank title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_research(
    _admin: Admin,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddResearchForm>,
) -> Result<impl IntoResponse, AppError> {
    ResearchPaperService::new(&state.db)
        .add(CreateResearchPaperParams::from_form(form))
        .await?;

    FlashSession::new(&session)
        .success("Research paper added successfully!")
        .await?;

    Ok(Redirect::to(ADMIN_PATH))
}

#[utoipa::path(
    get,
    path = "/delete_research/{id}",
    tag = RESEARCH_TAG,
    params(("id" = i32, Path, description = "Research paper ID")),
    responses(
        (status = 303, description = "Redirect to the admin panel"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_research(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ResearchPaperService::new(&state.db).delete(id).await?;

    Ok(Redirect::to(ADMIN_PATH))
}
