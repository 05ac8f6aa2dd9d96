//! Member data repository for database operations.
//!
//! Members and their research links are written and removed together inside a
//! transaction so a member is never visible with a partial link list.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::member::{CreateMemberParams, Member};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a member together with its research links.
    ///
    /// Links are stored with their index in `params.research_links` as position.
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member with assigned ID
    /// - `Err(DbErr)` - Insert failed, including a `student_id` unique constraint
    ///   violation; nothing is persisted in that case
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, DbErr> {
        let txn = self.db.begin().await?;

        let member = entity::member::ActiveModel {
            category: ActiveValue::Set(params.category),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            blood_group: ActiveValue::Set(params.blood_group),
            designation: ActiveValue::Set(params.designation),
            field_interest: ActiveValue::Set(params.field_interest),
            position_work: ActiveValue::Set(params.position_work),
            expertise: ActiveValue::Set(params.expertise),
            student_id: ActiveValue::Set(params.student_id),
            reg_no: ActiveValue::Set(params.reg_no),
            batch: ActiveValue::Set(params.batch),
            area_interest: ActiveValue::Set(params.area_interest),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut links = Vec::with_capacity(params.research_links.len());
        for (position, url) in params.research_links.into_iter().enumerate() {
            let link = entity::member_research_link::ActiveModel {
                member_id: ActiveValue::Set(member.id),
                position: ActiveValue::Set(position as i32),
                url: ActiveValue::Set(url),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            links.push(link);
        }

        txn.commit().await?;

        Ok(Member::from_entity(member, links))
    }

    /// Finds a member by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found with its links
    /// - `Ok(None)` - No member with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let Some(member) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_links(vec![member]).await?.pop())
    }

    /// Finds the member holding an exact student ID.
    pub async fn find_by_student_id(&self, student_id: &str) -> Result<Option<Member>, DbErr> {
        let Some(member) = entity::prelude::Member::find()
            .filter(entity::member::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_links(vec![member]).await?.pop())
    }

    /// Gets all members, most recently created first.
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let members = entity::prelude::Member::find()
            .order_by_desc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        self.with_links(members).await
    }

    /// Gets the members of an exact category ordered by student ID ascending.
    ///
    /// Members without a student ID sort first; ties are broken by ID.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Member>, DbErr> {
        let members = entity::prelude::Member::find()
            .filter(entity::member::Column::Category.eq(category))
            .order_by_asc(entity::member::Column::StudentId)
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        self.with_links(members).await
    }

    /// Deletes a member and its research links.
    ///
    /// # Returns
    /// - `Ok(true)` - Member existed and was deleted
    /// - `Ok(false)` - No member with that ID; nothing changed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::MemberResearchLink::delete_many()
            .filter(entity::member_research_link::Column::MemberId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Member::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the research links of the given members with a single query.
    ///
    /// Preserves the order of `members`.
    async fn with_links(&self, members: Vec<entity::member::Model>) -> Result<Vec<Member>, DbErr> {
        if members.is_empty() {
            return Ok(Vec::new());
        }

        let member_ids: Vec<i32> = members.iter().map(|m| m.id).collect();

        let mut links_by_member: HashMap<i32, Vec<entity::member_research_link::Model>> =
            HashMap::new();
        for link in entity::prelude::MemberResearchLink::find()
            .filter(entity::member_research_link::Column::MemberId.is_in(member_ids))
            .all(self.db)
            .await?
        {
            links_by_member.entry(link.member_id).or_default().push(link);
        }

        Ok(members
            .into_iter()
            .map(|member| {
                let links = links_by_member.remove(&member.id).unwrap_or_default();
                Member::from_entity(member, links)
            })
            .collect())
    }
}
