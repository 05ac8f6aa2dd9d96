//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// Defaults to a `Faculty` member named `Member {n}` without a student ID, batch or links.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    name: String,
    student_id: Option<String>,
    batch: Option<String>,
    links: Vec<String>,
}

impl<'a> MemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            category: "Faculty".to_string(),
            name: format!("Member {}", id),
            student_id: None,
            batch: None,
            links: Vec::new(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    pub fn batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = Some(batch.into());
        self
    }

    /// Sets the research links, stored in the given order.
    pub fn links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Inserts the member and its research link rows.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let member = entity::member::ActiveModel {
            category: ActiveValue::Set(self.category),
            name: ActiveValue::Set(Some(self.name)),
            student_id: ActiveValue::Set(self.student_id),
            batch: ActiveValue::Set(self.batch),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, url) in self.links.into_iter().enumerate() {
            entity::member_research_link::ActiveModel {
                member_id: ActiveValue::Set(member.id),
                position: ActiveValue::Set(position as i32),
                url: ActiveValue::Set(url),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(member)
    }
}

/// Creates a member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
