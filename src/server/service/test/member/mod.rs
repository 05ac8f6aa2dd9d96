use axum::{http::StatusCode, response::IntoResponse};
use crate::{
    model::{api::ErrorDto, member::AddMemberForm},
    server::{
        data::member::MemberRepository,
        error::AppError,
        model::member::{AddMemberOutcome, CreateMemberParams, ExploreResult, UNKNOWN_BATCH},
        service::member::{map_create_err, MemberService},
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod add;

fn form(category: &str, student_id: Option<&str>) -> AddMemberForm {
    AddMemberForm {
        category: category.to_string(),
        name: Some("Test Member".to_string()),
        student_id: student_id.map(str::to_string),
        ..Default::default()
    }
}
