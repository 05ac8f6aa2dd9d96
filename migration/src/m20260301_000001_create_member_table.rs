use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string_len(Member::Category, 50))
                    .col(string_len_null(Member::Name, 100))
                    .col(string_len_null(Member::Email, 100))
                    .col(string_len_null(Member::Phone, 20))
                    .col(string_len_null(Member::BloodGroup, 10))
                    .col(string_len_null(Member::Designation, 100))
                    .col(string_len_null(Member::FieldInterest, 200))
                    .col(string_len_null(Member::PositionWork, 100))
                    .col(string_len_null(Member::Expertise, 200))
                    .col(string_len_null(Member::StudentId, 50).unique_key())
                    .col(string_len_null(Member::RegNo, 50))
                    .col(string_len_null(Member::Batch, 20))
                    .col(string_len_null(Member::AreaInterest, 200))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_category")
                    .table(Member::Table)
                    .col(Member::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    Category,
    Name,
    Email,
    Phone,
    BloodGroup,
    Designation,
    FieldInterest,
    PositionWork,
    Expertise,
    StudentId,
    RegNo,
    Batch,
    AreaInterest,
}
