//! SeaORM entity models for the club database.

pub mod member;
pub mod member_research_link;
pub mod notice;
pub mod prelude;
pub mod research_paper;
