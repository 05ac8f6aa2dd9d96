use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BatchGroupDto {
    pub batch: String,
    pub members: Vec<MemberDto>,
}

/// Members of one category, either grouped by batch or as a flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExploreDto {
    Batched {
        category: String,
        batches: Vec<BatchGroupDto>,
    },
    Flat {
        category: String,
        members: Vec<MemberDto>,
    },
}

/// Fields submitted by the admin "add member" form.
///
/// `links[]` may repeat; each occurrence is one research link in submission order.
///
/// Request bodies are decoded by `parse_member_form`, since repeated keys do not fit the
/// `Form` extractor. The serde derive and rename exist so the OpenAPI schema lists the
/// field under its wire name `links[]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct AddMemberForm {
    pub category: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub blood: Option<String>,
    pub designation: Option<String>,
    pub field_interest: Option<String>,
    pub position: Option<String>,
    pub expertise: Option<String>,
    pub student_id: Option<String>,
    pub reg_no: Option<String>,
    pub batch: Option<String>,
    pub area_interest: Option<String>,
    #[serde(rename = "links[]", default)]
    pub links: Vec<String>,
}
