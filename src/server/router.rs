use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, home, member, notice, research},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Clubboard", description = "Academic club members, notices and research"),
    tags(
        (name = "public", description = "Public pages"),
        (name = "auth", description = "Admin login and logout"),
        (name = "admin", description = "Admin dashboard"),
        (name = "member", description = "Member directory and management"),
        (name = "notice", description = "Notice management"),
        (name = "research", description = "Research paper management"),
    )
)]
struct ApiDoc;

/// Builds every route of the application plus the Swagger UI at `/api/docs`.
///
/// The generated document itself is served at `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(home::home))
        .routes(routes!(home::notices))
        .routes(routes!(home::research))
        .routes(routes!(auth::login_page, auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(admin::dashboard))
        .routes(routes!(member::add_member))
        .routes(routes!(member::delete_member))
        .routes(routes!(member::explore))
        .routes(routes!(member::member_details))
        .routes(routes!(notice::add_notice))
        .routes(routes!(notice::delete_notice))
        .routes(routes!(research::add_research))
        .routes(routes!(research::delete_research))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", api))
}
