use sea_orm::DatabaseConnection;

use crate::server::{
    data::research_paper::ResearchPaperRepository,
    error::AppError,
    model::research_paper::{CreateResearchPaperParams, ResearchPaper},
};

pub struct ResearchPaperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResearchPaperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a research paper; the title must not be blank
    pub async fn add(&self, params: CreateResearchPaperParams) -> Result<ResearchPaper, AppError> {
        if params.title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }

        let paper = ResearchPaperRepository::new(self.db).create(params).await?;

        tracing::info!("Added research paper {}", paper.id);

        Ok(paper)
    }

    pub async fn get_all(&self) -> Result<Vec<ResearchPaper>, AppError> {
        Ok(ResearchPaperRepository::new(self.db).get_all().await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = ResearchPaperRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted research paper {}", id);
        }

        Ok(deleted)
    }
}
