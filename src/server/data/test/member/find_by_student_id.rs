use super::*;

/// Tests finding a member by exact student ID.
///
/// Expected: Ok(Some) for the exact value, Ok(None) for a prefix
#[tokio::test]
async fn finds_exact_student_id_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .category("Student")
        .student_id("2101001")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    let found = repo.find_by_student_id("2101001").await?;
    assert_eq!(found.map(|m| m.id), Some(member.id));

    assert!(repo.find_by_student_id("2101").await?.is_none());

    Ok(())
}
