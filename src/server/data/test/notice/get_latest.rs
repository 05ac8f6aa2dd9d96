use super::*;

/// Tests fetching the latest notices.
///
/// Verifies that no more than `limit` notices are returned and that they are
/// the most recently created ones, newest first.
///
/// Expected: Ok with the five highest IDs in descending order
#[tokio::test]
async fn returns_latest_notices_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..7 {
        ids.push(factory::notice::create_notice(db).await?.id);
    }

    let latest = NoticeRepository::new(db).get_latest(5).await?;

    let latest_ids: Vec<i32> = latest.iter().map(|n| n.id).collect();
    let expected: Vec<i32> = ids.iter().rev().take(5).copied().collect();
    assert_eq!(latest_ids, expected);

    Ok(())
}

/// Tests fetching the latest notices when fewer than the limit exist.
///
/// Expected: Ok with all notices
#[tokio::test]
async fn returns_all_when_fewer_than_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::notice::create_notice(db).await?;
    factory::notice::create_notice(db).await?;

    let latest = NoticeRepository::new(db).get_latest(5).await?;

    assert_eq!(latest.len(), 2);
    assert!(latest[0].id > latest[1].id);

    Ok(())
}
