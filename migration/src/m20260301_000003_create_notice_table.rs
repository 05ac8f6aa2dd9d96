use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(pk_auto(Notice::Id))
                    .col(string_len(Notice::Title, 200))
                    .col(string_len_null(Notice::Date, 50))
                    .col(string_len_null(Notice::Link, 300))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notice {
    Table,
    Id,
    Title,
    Date,
    Link,
}
