use super::*;

/// Tests creating a notice with free-text date and optional link.
///
/// Expected: Ok with fields stored as given
#[tokio::test]
async fn creates_notice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NoticeRepository::new(db);
    let notice = repo
        .create(CreateNoticeParams {
            title: "Seminar".to_string(),
            date: Some("Next Friday".to_string()),
            link: None,
        })
        .await?;

    assert_eq!(notice.title, "Seminar");
    assert_eq!(notice.date.as_deref(), Some("Next Friday"));
    assert!(notice.link.is_none());

    let all = repo.get_all().await?;
    assert_eq!(all, vec![notice]);

    Ok(())
}
