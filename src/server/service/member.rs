use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use std::collections::BTreeMap;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{
        AddMemberOutcome, BatchGroup, CreateMemberParams, ExploreResult, Member,
        BATCHED_CATEGORIES,
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a member after checking the student ID is not already taken.
    ///
    /// Blank student IDs skip the check. A duplicate found by the check aborts the add
    /// without writing anything. If a concurrent add wins the race between the check and
    /// the insert, the store's unique constraint rejects this insert and the caller
    /// receives `AppError::Conflict`.
    ///
    /// # Returns
    /// - `Ok(AddMemberOutcome::Created(_))` - Member stored
    /// - `Ok(AddMemberOutcome::DuplicateStudentId(_))` - Student ID already in use
    /// - `Err(AppError::BadRequest(_))` - Category is blank
    /// - `Err(AppError::Conflict(_))` - Lost the race on the student ID
    /// - `Err(AppError::DbErr(_))` - Any other database failure
    pub async fn add(&self, params: CreateMemberParams) -> Result<AddMemberOutcome, AppError> {
        if params.category.trim().is_empty() {
            return Err(AppError::BadRequest("Category is required".to_string()));
        }

        let repo = MemberRepository::new(self.db);

        if let Some(student_id) = params.student_id.as_deref() {
            if repo.find_by_student_id(student_id).await?.is_some() {
                return Ok(AddMemberOutcome::DuplicateStudentId(student_id.to_string()));
            }
        }

        let student_id = params.student_id.clone();

        let member = repo
            .create(params)
            .await
            .map_err(|err| map_create_err(err, student_id.as_deref()))?;

        tracing::info!("Added member {} ({})", member.id, member.category);

        Ok(AddMemberOutcome::Created(member))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Member>, AppError> {
        Ok(MemberRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets all members, most recently created first
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        Ok(MemberRepository::new(self.db).get_all().await?)
    }

    /// Builds the explore view of a category.
    ///
    /// Members are filtered to the exact category and, when `search` is non-empty, to
    /// those whose student ID contains `search` (case-sensitive). Batched categories are
    /// grouped by batch label with groups in descending label order; members keep the
    /// student ID order within each group. Other categories return a flat list.
    pub async fn explore(
        &self,
        category: &str,
        search: Option<&str>,
    ) -> Result<ExploreResult, AppError> {
        let members = MemberRepository::new(self.db)
            .get_by_category(category)
            .await?;

        let members = match search.filter(|s| !s.is_empty()) {
            Some(search) => members
                .into_iter()
                .filter(|m| {
                    m.student_id
                        .as_deref()
                        .is_some_and(|student_id| student_id.contains(search))
                })
                .collect(),
            None => members,
        };

        if BATCHED_CATEGORIES.contains(&category) {
            Ok(ExploreResult::Batched(group_by_batch(members)))
        } else {
            Ok(ExploreResult::Flat(members))
        }
    }

    /// Deletes a member; deleting a missing ID is a no-op
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = MemberRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted member {}", id);
        }

        Ok(deleted)
    }
}

/// Groups members by batch label, ordered by label descending.
fn group_by_batch(members: Vec<Member>) -> Vec<BatchGroup> {
    let mut batches: BTreeMap<String, Vec<Member>> = BTreeMap::new();

    for member in members {
        batches
            .entry(member.batch_label().to_string())
            .or_default()
            .push(member);
    }

    batches
        .into_iter()
        .rev()
        .map(|(batch, members)| BatchGroup { batch, members })
        .collect()
}

/// Maps a failed member insert to the error returned to the caller.
///
/// A unique constraint violation means another add claimed the student ID after the
/// duplicate check passed; it becomes `AppError::Conflict`. Anything else stays a
/// database error.
pub(crate) fn map_create_err(err: DbErr, student_id: Option<&str>) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(format!(
            "Student ID {} already exists",
            student_id.unwrap_or_default()
        )),
        _ => err.into(),
    }
}
