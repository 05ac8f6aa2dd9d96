use sea_orm::DatabaseConnection;

use crate::server::{
    data::notice::NoticeRepository,
    error::AppError,
    model::notice::{CreateNoticeParams, Notice},
};

/// Number of notices shown on the home page.
pub const HOME_NOTICE_LIMIT: u64 = 5;

pub struct NoticeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a notice; the title must not be blank
    pub async fn add(&self, params: CreateNoticeParams) -> Result<Notice, AppError> {
        if params.title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }

        let notice = NoticeRepository::new(self.db).create(params).await?;

        tracing::info!("Added notice {}", notice.id);

        Ok(notice)
    }

    pub async fn get_all(&self) -> Result<Vec<Notice>, AppError> {
        Ok(NoticeRepository::new(self.db).get_all().await?)
    }

    /// Gets the notices shown on the home page, newest first
    pub async fn get_latest(&self) -> Result<Vec<Notice>, AppError> {
        Ok(NoticeRepository::new(self.db)
            .get_latest(HOME_NOTICE_LIMIT)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = NoticeRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted notice {}", id);
        }

        Ok(deleted)
    }
}
