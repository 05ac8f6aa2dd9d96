use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    api::FlashMessageDto, member::MemberDto, notice::NoticeDto, research::ResearchPaperDto,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub notices: Vec<NoticeDto>,
    pub flash: Vec<FlashMessageDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoticesPageDto {
    pub title: String,
    pub notices: Vec<NoticeDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchPageDto {
    pub research: Vec<ResearchPaperDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginPageDto {
    pub logged_in: bool,
    pub flash: Vec<FlashMessageDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminDashboardDto {
    pub members: Vec<MemberDto>,
    pub notices: Vec<NoticeDto>,
    pub research: Vec<ResearchPaperDto>,
    pub flash: Vec<FlashMessageDto>,
}
