use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::notice::{CreateNoticeParams, Notice};

pub struct NoticeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNoticeParams) -> Result<Notice, DbErr> {
        let entity = entity::notice::ActiveModel {
            title: ActiveValue::Set(params.title),
            date: ActiveValue::Set(params.date),
            link: ActiveValue::Set(params.link),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notice::from_entity(entity))
    }

    /// Gets all notices, newest (highest ID) first
    pub async fn get_all(&self) -> Result<Vec<Notice>, DbErr> {
        let notices = entity::prelude::Notice::find()
            .order_by_desc(entity::notice::Column::Id)
            .all(self.db)
            .await?;

        Ok(notices.into_iter().map(Notice::from_entity).collect())
    }

    /// Gets at most `limit` notices, newest first
    pub async fn get_latest(&self, limit: u64) -> Result<Vec<Notice>, DbErr> {
        let notices = entity::prelude::Notice::find()
            .order_by_desc(entity::notice::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(notices.into_iter().map(Notice::from_entity).collect())
    }

    /// Deletes a notice, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notice::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
