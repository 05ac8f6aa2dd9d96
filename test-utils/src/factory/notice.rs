//! Notice factory for creating test notice entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notices.
///
/// Defaults: title `Notice {n}`, date `2026-01-01`, no link.
pub struct NoticeFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    date: Option<String>,
    link: Option<String>,
}

impl<'a> NoticeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Notice {}", next_id()),
            date: Some("2026-01-01".to_string()),
            link: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub async fn build(self) -> Result<entity::notice::Model, DbErr> {
        entity::notice::ActiveModel {
            title: ActiveValue::Set(self.title),
            date: ActiveValue::Set(self.date),
            link: ActiveValue::Set(self.link),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notice with default values.
pub async fn create_notice(db: &DatabaseConnection) -> Result<entity::notice::Model, DbErr> {
    NoticeFactory::new(db).build().await
}
