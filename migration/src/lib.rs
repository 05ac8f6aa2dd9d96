pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_member_table;
mod m20260301_000002_create_member_research_link_table;
mod m20260301_000003_create_notice_table;
mod m20260301_000004_create_research_paper_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_member_table::Migration),
            Box::new(m20260301_000002_create_member_research_link_table::Migration),
            Box::new(m20260301_000003_create_notice_table::Migration),
            Box::new(m20260301_000004_create_research_paper_table::Migration),
        ]
    }
}
