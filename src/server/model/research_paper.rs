//! Research paper domain models and parameters.

use crate::{
    model::research::{AddResearchForm, ResearchPaperDto},
    server::util::form::non_blank,
};

/// Bibliographic record pointing at an external publication.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchPaper {
    pub id: i32,
    pub title: String,
    pub authors: Option<String>,
    pub publication_date: Option<String>,
    pub journal: Option<String>,
    pub paper_link: Option<String>,
}

impl ResearchPaper {
    pub fn from_entity(entity: entity::research_paper::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            authors: entity.authors,
            publication_date: entity.publication_date,
            journal: entity.journal,
            paper_link: entity.paper_link,
        }
    }

    pub fn into_dto(self) -> ResearchPaperDto {
        ResearchPaperDto {
            id: self.id,
            title: self.title,
            authors: self.authors,
            publication_date: self.publication_date,
            journal: self.journal,
            paper_link: self.paper_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateResearchPaperParams {
    pub title: String,
    pub authors: Option<String>,
    pub publication_date: Option<String>,
    pub journal: Option<String>,
    pub paper_link: Option<String>,
}

impl CreateResearchPaperParams {
    /// Maps the form's `date` and `link` fields onto the stored column names.
    pub fn from_form(form: AddResearchForm) -> Self {
        Self {
            title: form.title.trim().to_string(),
            authors: non_blank(form.authors),
            publication_date: non_blank(form.date),
            journal: non_blank(form.journal),
            paper_link: non_blank(form.link),
        }
    }
}
