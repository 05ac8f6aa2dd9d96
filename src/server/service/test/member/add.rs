use super::*;

/// Tests adding a member with normalized links.
///
/// Verifies that blank links are dropped, the rest trimmed, and that the
/// links read back in submission order.
///
/// Expected: Ok(Created) with links ["a", "b"]
#[tokio::test]
async fn adds_member_with_normalized_links() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let outcome = service
        .add(CreateMemberParams::from_form(AddMemberForm {
            links: vec!["a".to_string(), "".to_string(), " b ".to_string()],
            ..form("Student", Some(" 2101001 "))
        }))
        .await?;

    let AddMemberOutcome::Created(member) = outcome else {
        panic!("expected member to be created");
    };
    assert_eq!(member.student_id.as_deref(), Some("2101001"));

    let reloaded = service.get_by_id(member.id).await?.unwrap();
    assert_eq!(reloaded.research_links, vec!["a", "b"]);

    Ok(())
}

/// Tests adding a member whose student ID already exists.
///
/// Verifies the duplicate is reported and no second row is written.
///
/// Expected: Ok(DuplicateStudentId) and one row for the student ID
#[tokio::test]
async fn rejects_duplicate_student_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .category("Student")
        .student_id("2101001")
        .build()
        .await?;

    let outcome = MemberService::new(db)
        .add(CreateMemberParams::from_form(AddMemberForm {
            links: vec!["https://a.example".to_string()],
            ..form("Alumni", Some("  2101001"))
        }))
        .await?;

    assert_eq!(
        outcome,
        AddMemberOutcome::DuplicateStudentId("2101001".to_string())
    );

    let count = entity::prelude::Member::find()
        .filter(entity::member::Column::StudentId.eq("2101001"))
        .count(db)
        .await?;
    assert_eq!(count, 1);
    assert_eq!(
        entity::prelude::MemberResearchLink::find().count(db).await?,
        0
    );

    Ok(())
}

/// Tests adding members without a student ID.
///
/// Verifies blank and missing student IDs skip the uniqueness check and are
/// stored as NULL so repeated adds succeed.
///
/// Expected: Ok(Created) for every add
#[tokio::test]
async fn adds_members_with_blank_student_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    for student_id in [None, Some(""), Some("   ")] {
        let outcome = service
            .add(CreateMemberParams::from_form(form("Staff", student_id)))
            .await?;

        let AddMemberOutcome::Created(member) = outcome else {
            panic!("expected member to be created");
        };
        assert!(member.student_id.is_none());
    }

    assert_eq!(entity::prelude::Member::find().count(db).await?, 3);

    Ok(())
}

/// Tests adding a member with a blank category.
///
/// Expected: Err(BadRequest) and no row written
#[tokio::test]
async fn rejects_blank_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberService::new(db)
        .add(CreateMemberParams::from_form(form("  ", Some("2101001"))))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Member::find().count(db).await?, 0);

    Ok(())
}

/// Tests the error returned when the student ID is claimed between the duplicate
/// check and the insert.
///
/// Inserts the same student ID twice through the repository, bypassing the check,
/// and maps the failed insert the way `add` does.
///
/// Expected: AppError::Conflict rendered as 409 with an error body
#[tokio::test]
async fn insert_race_on_student_id_is_a_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(CreateMemberParams::from_form(form("Student", Some("2101001"))))
        .await?;

    let err = repo
        .create(CreateMemberParams::from_form(form("Alumni", Some("2101001"))))
        .await
        .unwrap_err();

    let err = map_create_err(err, Some("2101001"));
    let AppError::Conflict(message) = &err else {
        panic!("expected conflict, got {:?}", err);
    };
    assert_eq!(message, "Student ID 2101001 already exists");

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ErrorDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "Student ID 2101001 already exists");

    assert_eq!(entity::prelude::Member::find().count(db).await?, 1);

    Ok(())
}

#[test]
fn other_insert_failures_stay_database_errors() {
    let err = map_create_err(DbErr::Custom("disk I/O error".to_string()), Some("1"));

    assert!(matches!(err, AppError::DbErr(_)));
}
