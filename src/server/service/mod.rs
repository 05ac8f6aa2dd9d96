//! Business logic layer.
//!
//! Services sit between controllers and repositories. They apply the rules that are not
//! plain storage concerns: student ID de-duplication, explore grouping, required-field
//! checks and admin credential verification.

pub mod auth;
pub mod member;
pub mod notice;
pub mod research_paper;

#[cfg(test)]
mod test;
