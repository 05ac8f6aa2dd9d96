use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResearchPaper::Table)
                    .if_not_exists()
                    .col(pk_auto(ResearchPaper::Id))
                    .col(string_len(ResearchPaper::Title, 300))
                    .col(string_len_null(ResearchPaper::Authors, 200))
                    .col(string_len_null(ResearchPaper::PublicationDate, 50))
                    .col(string_len_null(ResearchPaper::Journal, 200))
                    .col(string_len_null(ResearchPaper::PaperLink, 300))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResearchPaper::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResearchPaper {
    Table,
    Id,
    Title,
    Authors,
    PublicationDate,
    Journal,
    PaperLink,
}
