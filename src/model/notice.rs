use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoticeDto {
    pub id: i32,
    pub title: String,
    pub date: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddNoticeForm {
    pub title: String,
    pub date: Option<String>,
    pub link: Option<String>,
}
