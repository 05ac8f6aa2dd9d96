pub use super::member::Entity as Member;
pub use super::member_research_link::Entity as MemberResearchLink;
pub use super::notice::Entity as Notice;
pub use super::research_paper::Entity as ResearchPaper;
