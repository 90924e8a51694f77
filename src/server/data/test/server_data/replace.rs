use super::*;

/// Tests that a sync replaces the cached rows of one guild only.
///
/// Expected: Ok with old rows of the guild gone and other guilds untouched
#[tokio::test]
async fn replaces_cached_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_role(db, "1", "100", "Old role", 1).await?;
    factory::create_guild_channel(db, "1", "200", "old-chat", "text", 0).await?;
    factory::create_guild_role(db, "2", "300", "Other guild", 1).await?;

    let repo = ServerDataRepository::new(db);
    repo.replace(
        1,
        SyncServerDataParam {
            roles: vec![SyncRoleParam {
                role_id: "101".to_string(),
                name: "Mods".to_string(),
                color: "#FF0000".to_string(),
                position: 3,
            }],
            channels: vec![SyncChannelParam {
                channel_id: "201".to_string(),
                name: "general".to_string(),
                kind: "text".to_string(),
                position: 0,
            }],
            emojis: vec![SyncEmojiParam {
                emoji_id: "301".to_string(),
                name: "wave".to_string(),
                animated: true,
            }],
        },
    )
    .await?;

    let data = repo.get(1).await?;
    assert_eq!(data.roles.len(), 1);
    assert_eq!(data.roles[0].name, "Mods");
    assert_eq!(data.channels[0].channel_id, "201");
    assert_eq!(data.emojis[0].name, "wave");

    let other = repo.get(2).await?;
    assert_eq!(other.roles.len(), 1);

    Ok(())
}

/// Tests a sync with no data clearing the cache.
///
/// Expected: Ok with empty lists
#[tokio::test]
async fn empty_sync_clears_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_emoji(db, "1", "5", "cat").await?;

    let repo = ServerDataRepository::new(db);
    repo.replace(1, SyncServerDataParam::default()).await?;

    let data = repo.get(1).await?;
    assert!(data.roles.is_empty() && data.channels.is_empty() && data.emojis.is_empty());

    Ok(())
}
