use super::*;

/// Tests opening and closing a voice session.
///
/// Expected: Ok with the session closed and counted as ended
#[tokio::test]
async fn starts_and_ends_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VoiceSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VoiceSessionRepository::new(db);
    let started_at = Utc::now() - Duration::minutes(12);
    let session = repo.start(1, "42", "900", true, started_at).await?;

    assert_eq!(repo.stats(1).await?, (0, 1));
    let open = repo.find_open(1, "42").await?.unwrap();
    assert_eq!(open.id, session.id);

    repo.end(session.id, Utc::now(), 60).await?;

    assert!(repo.find_open(1, "42").await?.is_none());
    assert_eq!(repo.stats(1).await?, (1, 0));

    let latest = repo.latest(1, 50).await?;
    assert_eq!(latest[0].xp_earned, 60);

    Ok(())
}

/// Tests that the latest sessions are limited and newest first.
///
/// Expected: Ok with the two newest sessions
#[tokio::test]
async fn limits_latest_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VoiceSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::leveling::VoiceSessionFactory::new(db, "1", "1")
        .started_at(now - Duration::hours(3))
        .build()
        .await?;
    let middle = factory::leveling::VoiceSessionFactory::new(db, "1", "2")
        .started_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::leveling::VoiceSessionFactory::new(db, "1", "3")
        .started_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = VoiceSessionRepository::new(db);
    let ids: Vec<i32> = repo.latest(1, 2).await?.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![newest.id, middle.id]);

    Ok(())
}
