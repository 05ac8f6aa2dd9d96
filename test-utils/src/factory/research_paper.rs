//! Research paper factory for creating test research paper entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test research papers.
///
/// Defaults: title `Paper {n}`, authors `A. Author`, no journal or link.
pub struct ResearchPaperFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    authors: Option<String>,
    journal: Option<String>,
}

impl<'a> ResearchPaperFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Paper {}", next_id()),
            authors: Some("A. Author".to_string()),
            journal: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = Some(journal.into());
        self
    }

    pub async fn build(self) -> Result<entity::research_paper::Model, DbErr> {
        entity::research_paper::ActiveModel {
            title: ActiveValue::Set(self.title),
            authors: ActiveValue::Set(self.authors),
            journal: ActiveValue::Set(self.journal),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a research paper with default values.
pub async fn create_research_paper(
    db: &DatabaseConnection,
) -> Result<entity::research_paper::Model, DbErr> {
    ResearchPaperFactory::new(db).build().await
}
