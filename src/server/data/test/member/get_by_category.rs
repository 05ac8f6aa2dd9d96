use super::*;

/// Tests filtering members by category.
///
/// Verifies that only exact category matches are returned, ordered by
/// student ID ascending.
///
/// Expected: Ok with matching members sorted by student ID
#[tokio::test]
async fn filters_by_exact_category_sorted_by_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for student_id in ["2103", "2101", "2102"] {
        factory::member::MemberFactory::new(db)
            .category("Student")
            .student_id(student_id)
            .build()
            .await?;
    }
    factory::member::MemberFactory::new(db)
        .category("Alumni")
        .student_id("1901")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .category("student")
        .student_id("2100")
        .build()
        .await?;

    let members = MemberRepository::new(db).get_by_category("Student").await?;

    let student_ids: Vec<&str> = members
        .iter()
        .filter_map(|m| m.student_id.as_deref())
        .collect();
    assert_eq!(student_ids, vec!["2101", "2102", "2103"]);

    Ok(())
}

/// Tests filtering by a category with no members.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::create_member(db).await?;

    let members = MemberRepository::new(db).get_by_category("Staff").await?;

    assert!(members.is_empty());

    Ok(())
}
