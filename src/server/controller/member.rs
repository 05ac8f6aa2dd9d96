use axum::{
    extract::{Path, Query, RawForm, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        member::{AddMemberForm, ExploreDto, MemberDto},
    },
    server::{
        controller::ADMIN_PATH,
        error::AppError,
        middleware::{auth::Admin, session::FlashSession},
        model::member::{AddMemberOutcome, CreateMemberParams},
        service::member::MemberService,
        state::AppState,
        util::form::parse_member_form,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExploreQuery {
    /// Substring matched against student IDs
    pub search: Option<String>,
}

/// Adds a member from the admin panel form.
///
/// Repeated `links[]` fields become the member's research links in submission order.
///
/// # Access Control
/// - `Admin` - Anonymous visitors are redirected to `/login` and nothing is written
///
/// # Returns
/// - `303 See Other` to `/admin` - Member added, or the student ID was already taken
///   (reported as a flash message)
/// - `400 Bad Request` - Category missing or blank
/// - `409 Conflict` - A concurrent add claimed the same student ID
#[utoipa::path(
    post,
    path = "/add_member",
    tag = MEMBER_TAG,
    request_body(content = AddMemberForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the admin panel"),
        (status = 400, description = "Invalid form", body = ErrorDto),
        (status = 409, description = "Student ID already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_member(
    _admin: Admin,
    State(state): State<AppState>,
    session: Session,
    RawForm(body): RawForm,
) -> Result<impl IntoResponse, AppError> {
    let form = parse_member_form(&body)?;
    let params = CreateMemberParams::from_form(form);

    let flash = FlashSession::new(&session);
    match MemberService::new(&state.db).add(params).await? {
        AddMemberOutcome::Created(_) => flash.success("Member added successfully!").await?,
        AddMemberOutcome::DuplicateStudentId(student_id) => {
            flash
                .danger(format!("Error: Student ID {} already exists!", student_id))
                .await?
        }
    }

    Ok(Redirect::to(ADMIN_PATH))
}

/// Deletes a member with its research links; unknown IDs are ignored.
#[utoipa::path(
    get,
    path = "/delete_member/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 303, description = "Redirect to the admin panel"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    MemberService::new(&state.db).delete(id).await?;

    Ok(Redirect::to(ADMIN_PATH))
}

/// Members of one category.
///
/// Students and alumni are grouped by batch (`kind = "batched"`); other categories are
/// listed flat (`kind = "flat"`). An empty `search` applies no filter.
#[utoipa::path(
    get,
    path = "/explore/{category}",
    tag = MEMBER_TAG,
    params(
        ("category" = String, Path, description = "Member category, matched exactly"),
        ExploreQuery
    ),
    responses(
        (status = 200, description = "Members of the category", body = ExploreDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn explore(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<ExploreQuery>,
) -> Result<impl IntoResponse, AppError> {
    let result = MemberService::new(&state.db)
        .explore(&category, query.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto(category))))
}

/// Full profile of one member.
#[utoipa::path(
    get,
    path = "/member/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member profile", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn member_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some(member) = MemberService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound("Member not found".to_string()));
    };

    Ok((StatusCode::OK, Json(member.into_dto())))
}
