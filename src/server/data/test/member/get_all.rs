use super::*;

/// Tests listing all members.
///
/// Verifies members come back newest first, each with its own links.
///
/// Expected: Ok with descending IDs
#[tokio::test]
async fn lists_newest_first_with_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::member::MemberFactory::new(db)
        .links(["https://first.example"])
        .build()
        .await?;
    let second = factory::member::create_member(db).await?;
    let third = factory::member::MemberFactory::new(db)
        .links(["https://third.example/1", "https://third.example/2"])
        .build()
        .await?;

    let members = MemberRepository::new(db).get_all().await?;

    let ids: Vec<i32> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
    assert_eq!(
        members[0].research_links,
        vec!["https://third.example/1", "https://third.example/2"]
    );
    assert!(members[1].research_links.is_empty());
    assert_eq!(members[2].research_links, vec!["https://first.example"]);

    Ok(())
}

/// Tests listing members from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let members = MemberRepository::new(db).get_all().await?;

    assert!(members.is_empty());

    Ok(())
}
