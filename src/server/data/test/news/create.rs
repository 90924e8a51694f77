use super::*;

/// Tests creating a news entry.
///
/// Expected: Ok with a UUID id and posted false
#[tokio::test]
async fn creates_unposted_news() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsRepository::new(db);
    let news = repo
        .create(
            1,
            CreateNewsParam {
                title: "Update".to_string(),
                content: "New features".to_string(),
                scheduled_for: None,
            },
        )
        .await?;

    assert!(uuid::Uuid::parse_str(&news.id).is_ok());
    assert!(!news.posted);
    assert_eq!(repo.count(1).await?, 1);

    assert!(repo.delete(1, &news.id).await?);
    assert!(!repo.delete(1, &news.id).await?);

    Ok(())
}
