use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResearchPaperDto {
    pub id: i32,
    pub title: String,
    pub authors: Option<String>,
    pub publication_date: Option<String>,
    pub journal: Option<String>,
    pub paper_link: Option<String>,
}

/// Form fields submitted by the admin panel; `date` and `link` keep the form's names.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddResearchForm {
    pub title: String,
    pub authors: Option<String>,
    pub date: Option<String>,
    pub journal: Option<String>,
    pub link: Option<String>,
}
