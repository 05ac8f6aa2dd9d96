use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    #[sea_orm(unique)]
    pub student_id: Option<String>,
    pub reg_no: Option<String>,
    pub batch: Option<String>,
    pub area_interest: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::member_research_link::Entity")]
    MemberResearchLink,
}

impl Related<super::member_research_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberResearchLink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
