//! Member domain models and parameters.
//!
//! Members are people tracked by the club (students, alumni, faculty, staff). Their
//! research links are kept as an ordered list backed by the `member_research_link`
//! table rather than a delimiter-joined string.

use crate::{
    model::member::{AddMemberForm, BatchGroupDto, ExploreDto, MemberDto},
    server::util::form::{non_blank, normalize_links},
};

/// Categories whose explore view is grouped by batch.
pub const BATCHED_CATEGORIES: [&str; 2] = ["Student", "Alumni"];

/// Batch label used for members without a batch.
pub const UNKNOWN_BATCH: &str = "Unknown Batch";

/// Member record with its research links in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub category: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub blood_group: Option<String>,
    pub designation: Option<String>,
    pub field_interest: Option<String>,
    pub position_work: Option<String>,
    pub expertise: Option<String>,
    pub student_id: Option<String>,
    pub reg_no: Option<String>,
    pub batch: Option<String>,
    pub area_interest: Option<String>,
    pub research_links: Vec<String>,
}

impl Member {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// Links are ordered by their stored position regardless of the order given.
    ///
    /// # Arguments
    /// - `entity` - The member row
    /// - `links` - The member's research link rows
    pub fn from_entity(
        entity: entity::member::Model,
        mut links: Vec<entity::member_research_link::Model>,
    ) -> Self {
        links.sort_by_key(|link| link.position);

        Self {
            id: entity.id,
            category: entity.category,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            blood_group: entity.blood_group,
            designation: entity.designation,
            field_interest: entity.field_interest,
            position_work: entity.position_work,
            expertise: entity.expertise,
            student_id: entity.student_id,
            reg_no: entity.reg_no,
            batch: entity.batch,
            area_interest: entity.area_interest,
            research_links: links.into_iter().map(|link| link.url).collect(),
        }
    }

    /// Label of the batch group this member belongs to in a batched view.
    pub fn batch_label(&self) -> &str {
        match self.batch.as_deref().map(str::trim) {
            Some(batch) if !batch.is_empty() => batch,
            _ => UNKNOWN_BATCH,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            category: self.category,
            name: self.name,
            email: self.email,
            phone: self.phone,
            blood_group: self.blood_group,
            designation: self.designation,
            field_interest: self.field_interest,
            position_work: self.position_work,
            expertise: self.expertise,
            student_id: self.student_id,
            reg_no: self.reg_no,
            batch: self.batch,
            area_interest: self.area_interest,
            research_links: self.research_links,
        }
    }
}

/// Parameters for creating a member.
///
/// Optional fields are already normalized: trimmed, with blank input mapped to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateMemberParams {
    pub category: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub blood_group: Option<String>,
    pub designation: Option<String>,
    pub field_interest: Option<String>,
    pub position_work: Option<String>,
    pub expertise: Option<String>,
    pub student_id: Option<String>,
    pub reg_no: Option<String>,
    pub batch: Option<String>,
    pub area_interest: Option<String>,
    pub research_links: Vec<String>,
}

impl CreateMemberParams {
    /// Converts the submitted form into normalized creation parameters.
    ///
    /// The category is stored exactly as submitted so explore lookups match it verbatim.
    pub fn from_form(form: AddMemberForm) -> Self {
        Self {
            category: form.category,
            name: non_blank(form.name),
            email: non_blank(form.email),
            phone: non_blank(form.phone),
            blood_group: non_blank(form.blood),
            designation: non_blank(form.designation),
            field_interest: non_blank(form.field_interest),
            position_work: non_blank(form.position),
            expertise: non_blank(form.expertise),
            student_id: non_blank(form.student_id),
            reg_no: non_blank(form.reg_no),
            batch: non_blank(form.batch),
            area_interest: non_blank(form.area_interest),
            research_links: normalize_links(form.links),
        }
    }
}

/// Result of adding a member.
#[derive(Debug, Clone, PartialEq)]
pub enum AddMemberOutcome {
    Created(Member),
    /// Another member already holds this student ID; nothing was written.
    DuplicateStudentId(String),
}

/// Members of one batch in a batched explore view.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchGroup {
    pub batch: String,
    pub members: Vec<Member>,
}

/// Explore view of one category.
#[derive(Debug, Clone, PartialEq)]
pub enum ExploreResult {
    /// Groups ordered by batch label, descending.
    Batched(Vec<BatchGroup>),
    Flat(Vec<Member>),
}

impl ExploreResult {
    pub fn into_dto(self, category: String) -> ExploreDto {
        match self {
            Self::Batched(groups) => ExploreDto::Batched {
                category,
                batches: groups
                    .into_iter()
                    .map(|group| BatchGroupDto {
                        batch: group.batch,
                        members: group.members.into_iter().map(Member::into_dto).collect(),
                    })
                    .collect(),
            },
            Self::Flat(members) => ExploreDto::Flat {
                category,
                members: members.into_iter().map(Member::into_dto).collect(),
            },
        }
    }
}
