//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally and return domain models
//! to keep the data layer separate from business logic. Every method is a single
//! unit of work; no transaction spans more than one entity type.

pub mod member;
pub mod notice;
pub mod research_paper;

#[cfg(test)]
mod test;
