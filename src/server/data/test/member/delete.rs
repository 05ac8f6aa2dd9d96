use super::*;

/// Tests deleting a member by ID.
///
/// Verifies that the member and its research links are removed.
///
/// Expected: Ok(true) with member and links deleted
#[tokio::test]
async fn deletes_member_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .links(["https://a.example", "https://b.example"])
        .build()
        .await?;

    let deleted = MemberRepository::new(db).delete(member.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Member::find_by_id(member.id)
        .one(db)
        .await?
        .is_none());

    let link_count = entity::prelude::MemberResearchLink::find()
        .filter(entity::member_research_link::Column::MemberId.eq(member.id))
        .count(db)
        .await?;
    assert_eq!(link_count, 0);

    Ok(())
}

/// Tests deleting a member that does not exist.
///
/// Expected: Ok(false) and other members untouched
#[tokio::test]
async fn ignores_nonexistent_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;

    let deleted = MemberRepository::new(db).delete(member.id + 100).await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Member::find().count(db).await?, 1);

    Ok(())
}
