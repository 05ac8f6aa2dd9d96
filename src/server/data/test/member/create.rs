use super::*;

/// Tests creating a member with research links.
///
/// Verifies that the member row is stored and its links are returned in
/// submission order.
///
/// Expected: Ok with links in order
#[tokio::test]
async fn creates_member_with_ordered_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let created = repo
        .create(CreateMemberParams {
            research_links: vec![
                "https://c.example".to_string(),
                "https://a.example".to_string(),
                "https://b.example".to_string(),
            ],
            ..params("Student", Some("2101001"))
        })
        .await?;

    assert_eq!(created.category, "Student");
    assert_eq!(created.student_id.as_deref(), Some("2101001"));
    assert_eq!(
        created.research_links,
        vec!["https://c.example", "https://a.example", "https://b.example"]
    );

    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded, created);

    Ok(())
}

/// Tests that the store rejects a duplicate student ID.
///
/// Verifies the unique constraint backstop: inserting a second member with the
/// same student ID fails and leaves a single row.
///
/// Expected: Err(DbErr) and one member with that student ID
#[tokio::test]
async fn fails_on_duplicate_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(params("Student", Some("2101001"))).await?;

    let result = repo
        .create(CreateMemberParams {
            research_links: vec!["https://a.example".to_string()],
            ..params("Alumni", Some("2101001"))
        })
        .await;

    assert!(result.is_err());

    let count = entity::prelude::Member::find()
        .filter(entity::member::Column::StudentId.eq("2101001"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    let link_count = entity::prelude::MemberResearchLink::find().count(db).await?;
    assert_eq!(link_count, 0);

    Ok(())
}

/// Tests that several members may omit the student ID.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_multiple_members_without_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(params("Faculty", None)).await?;
    repo.create(params("Faculty", None)).await?;

    let count = entity::prelude::Member::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
