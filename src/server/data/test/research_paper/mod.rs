use crate::server::{
    data::research_paper::ResearchPaperRepository,
    model::research_paper::CreateResearchPaperParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a research paper.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_research_paper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let paper = ResearchPaperRepository::new(db)
        .create(CreateResearchPaperParams {
            title: "On Solitons".to_string(),
            authors: Some("A. Rahman, B. Karim".to_string()),
            publication_date: Some("March 2025".to_string()),
            journal: Some("Phys. Rev. E".to_string()),
            paper_link: Some("https://doi.example/1".to_string()),
        })
        .await?;

    assert_eq!(paper.title, "On Solitons");
    assert_eq!(paper.journal.as_deref(), Some("Phys. Rev. E"));
    assert_eq!(paper.publication_date.as_deref(), Some("March 2025"));

    Ok(())
}

/// Tests listing research papers.
///
/// Expected: Ok with newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::research_paper::create_research_paper(db).await?;
    let newer = factory::research_paper::create_research_paper(db).await?;

    let papers = ResearchPaperRepository::new(db).get_all().await?;

    let ids: Vec<i32> = papers.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests deleting existing and nonexistent research papers.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let paper = factory::research_paper::create_research_paper(db).await?;
    let repo = ResearchPaperRepository::new(db);

    assert!(repo.delete(paper.id).await?);
    assert!(!repo.delete(paper.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
