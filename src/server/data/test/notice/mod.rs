use crate::server::{data::notice::NoticeRepository, model::notice::CreateNoticeParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_latest;
