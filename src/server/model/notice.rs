//! Notice domain models and parameters.

use crate::{
    model::notice::{AddNoticeForm, NoticeDto},
    server::util::form::non_blank,
};

/// Dated announcement; `date` is free text.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub date: Option<String>,
    pub link: Option<String>,
}

impl Notice {
    pub fn from_entity(entity: entity::notice::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            date: entity.date,
            link: entity.link,
        }
    }

    pub fn into_dto(self) -> NoticeDto {
        NoticeDto {
            id: self.id,
            title: self.title,
            date: self.date,
            link: self.link,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNoticeParams {
    pub title: String,
    pub date: Option<String>,
    pub link: Option<String>,
}

impl CreateNoticeParams {
    pub fn from_form(form: AddNoticeForm) -> Self {
        Self {
            title: form.title.trim().to_string(),
            date: non_blank(form.date),
            link: non_blank(form.link),
        }
    }
}
