use super::*;

/// Tests selecting scheduled news that is due.
///
/// Verifies that future, already posted and unscheduled entries are skipped.
///
/// Expected: Ok with only the past, unposted entry
#[tokio::test]
async fn returns_only_due_unposted_news() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let due = factory::news::NewsFactory::new(db, "1")
        .title("due")
        .scheduled_for(now - Duration::minutes(5))
        .build()
        .await?;
    factory::news::NewsFactory::new(db, "1")
        .title("future")
        .scheduled_for(now + Duration::hours(1))
        .build()
        .await?;
    factory::news::NewsFactory::new(db, "2")
        .title("posted")
        .scheduled_for(now - Duration::hours(1))
        .posted(true)
        .build()
        .await?;
    factory::create_news(db, "1").await?;

    let repo = NewsRepository::new(db);
    let pending = repo.get_due(now).await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, due.id);

    repo.mark_posted(&due.id).await?;
    assert!(repo.get_due(now).await?.is_empty());

    Ok(())
}
