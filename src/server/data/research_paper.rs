use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::research_paper::{CreateResearchPaperParams, ResearchPaper};

pub struct ResearchPaperRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResearchPaperRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateResearchPaperParams) -> Result<ResearchPaper, DbErr> {
        let entity = entity::research_paper::ActiveModel {
            title: ActiveValue::Set(params.title),
            authors: ActiveValue::Set(params.authors),
            publication_date: ActiveValue::Set(params.publication_date),
            journal: ActiveValue::Set(params.journal),
            paper_link: ActiveValue::Set(params.paper_link),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ResearchPaper::from_entity(entity))
    }

    /// Gets all research papers, newest (highest ID) first
    pub async fn get_all(&self) -> Result<Vec<ResearchPaper>, DbErr> {
        let papers = entity::prelude::ResearchPaper::find()
            .order_by_desc(entity::research_paper::Column::Id)
            .all(self.db)
            .await?;

        Ok(papers.into_iter().map(ResearchPaper::from_entity).collect())
    }

    /// Deletes a research paper, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ResearchPaper::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
