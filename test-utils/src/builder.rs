use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts backed by an in-memory SQLite database.
///
/// Tables are generated from the SeaORM entities, so the schema used in tests always
/// matches the entity definitions (including the unique `student_id` column and the
/// cascading member link relation).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Member, Notice};
///
/// let test = TestBuilder::new()
///     .with_table(Member)
///     .with_table(Notice)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables referenced by foreign keys must be added before the tables referencing them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table used by the club application.
    ///
    /// Adds, in dependency order: `Member`, `MemberResearchLink`, `Notice`, `ResearchPaper`.
    pub fn with_club_tables(self) -> Self {
        self.with_table(Member)
            .with_table(MemberResearchLink)
            .with_table(Notice)
            .with_table(ResearchPaper)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database ready for use
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
