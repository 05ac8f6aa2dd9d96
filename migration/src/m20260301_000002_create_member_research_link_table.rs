use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberResearchLink::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberResearchLink::Id))
                    .col(integer(MemberResearchLink::MemberId))
                    .col(integer(MemberResearchLink::Position))
                    .col(text(MemberResearchLink::Url))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_research_link_member_id")
                            .from(MemberResearchLink::Table, MemberResearchLink::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberResearchLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberResearchLink {
    Table,
    Id,
    MemberId,
    Position,
    Url,
}
