use super::*;

/// Tests recording a server data sync for a guild without configuration.
///
/// Expected: Ok with the config created and the timestamp stored
#[tokio::test]
async fn records_sync_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    assert_eq!(repo.last_server_sync(3).await?, None);

    let now = Utc::now();
    repo.set_last_server_sync(3, now).await?;

    let stored = repo.last_server_sync(3).await?.unwrap();
    assert_eq!(stored.timestamp(), now.timestamp());
    assert!(repo.find(3).await?.is_some());

    Ok(())
}
