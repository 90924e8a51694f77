use super::*;

/// Tests creating, counting and deleting temporary channels.
///
/// Expected: Ok with the per-creator count following inserts and deletes
#[tokio::test]
async fn tracks_channels_per_creator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TempChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_temp_channel(db, "1", "50", Some(3)).await?;
    factory::create_temp_channel(db, "1", "51", None).await?;

    let repo = TempChannelRepository::new(db);
    let created = repo
        .create(
            1,
            CreateTempChannelParam {
                channel_id: "900".to_string(),
                owner_id: "52".to_string(),
                creator_id: Some(3),
                name: "🔊 Bob's channel".to_string(),
            },
        )
        .await?;

    assert_eq!(created.owner_id, "52");
    assert_eq!(repo.get_for_creator(3).await?.len(), 2);
    assert_eq!(repo.get_all(1).await?.len(), 3);

    assert!(repo.delete(1, "900").await?);
    assert!(repo.find("900").await?.is_none());
    assert_eq!(repo.get_for_creator(3).await?.len(), 1);

    Ok(())
}
